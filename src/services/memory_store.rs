// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process object store for tests and local runs.

use crate::error::{AppError, Result};
use crate::services::storage::{BucketHandle, ObjectStore, BUCKET_LOCATION, BUCKET_STORAGE_CLASS};
use async_trait::async_trait;
use axum::body::Bytes;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A stored blob with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub content: Bytes,
    pub content_type: String,
}

impl StoredBlob {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

#[derive(Debug, Clone)]
struct BucketMeta {
    storage_class: String,
    location: String,
}

/// `DashMap`-backed object store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    buckets: DashMap<String, BucketMeta>,
    blobs: DashMap<(String, String), StoredBlob>,
    uploads: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one pre-existing bucket.
    pub fn with_bucket(name: &str) -> Self {
        let store = Self::new();
        store.add_bucket(name);
        store
    }

    /// Register a bucket as if it had been created out of band.
    pub fn add_bucket(&self, name: &str) {
        self.buckets.insert(
            name.to_string(),
            BucketMeta {
                storage_class: "STANDARD".to_string(),
                location: BUCKET_LOCATION.to_string(),
            },
        );
    }

    pub fn blob(&self, bucket: &str, path: &str) -> Option<StoredBlob> {
        self.blobs
            .get(&(bucket.to_string(), path.to_string()))
            .map(|entry| entry.value().clone())
    }

    /// Sorted paths of all blobs in `bucket`.
    pub fn blob_paths(&self, bucket: &str) -> Vec<String> {
        let mut paths: Vec<String> = self
            .blobs
            .iter()
            .filter(|entry| entry.key().0 == bucket)
            .map(|entry| entry.key().1.clone())
            .collect();
        paths.sort();
        paths
    }

    /// Total successful uploads, overwrites included.
    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::Relaxed)
    }

    pub fn bucket_storage_class(&self, name: &str) -> Option<String> {
        self.buckets
            .get(name)
            .map(|entry| entry.storage_class.clone())
    }

    pub fn bucket_location(&self, name: &str) -> Option<String> {
        self.buckets.get(name).map(|entry| entry.location.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get_bucket(&self, name: &str) -> Result<BucketHandle> {
        if self.buckets.contains_key(name) {
            Ok(BucketHandle::new(name))
        } else {
            Err(AppError::Storage(format!("Bucket {} not found", name)))
        }
    }

    async fn insert_bucket(&self, name: &str) -> Result<BucketHandle> {
        use dashmap::mapref::entry::Entry;

        match self.buckets.entry(name.to_string()) {
            Entry::Occupied(_) => Err(AppError::Storage(format!(
                "Bucket {} already exists",
                name
            ))),
            Entry::Vacant(slot) => {
                slot.insert(BucketMeta {
                    storage_class: BUCKET_STORAGE_CLASS.to_string(),
                    location: BUCKET_LOCATION.to_string(),
                });
                Ok(BucketHandle::new(name))
            }
        }
    }

    async fn upload_blob(
        &self,
        bucket: &BucketHandle,
        path: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<()> {
        if !self.buckets.contains_key(bucket.name()) {
            return Err(AppError::Storage(format!(
                "Bucket {} not found",
                bucket.name()
            )));
        }

        self.blobs.insert(
            (bucket.name().to_string(), path.to_string()),
            StoredBlob {
                content,
                content_type: content_type.to_string(),
            },
        );
        self.uploads.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
