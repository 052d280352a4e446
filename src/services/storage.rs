// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Object storage seam.
//!
//! The worker only talks to `ObjectStore`; production wires in
//! [`GcsStore`](crate::services::GcsStore), tests and local runs use
//! [`MemoryStore`](crate::services::MemoryStore).

use crate::config::{Config, StorageBackend};
use crate::error::Result;
use crate::services::{GcsStore, MemoryStore};
use async_trait::async_trait;
use axum::body::Bytes;
use std::sync::Arc;

/// Storage class for newly created buckets.
pub const BUCKET_STORAGE_CLASS: &str = "COLDLINE";

/// Location for newly created buckets.
pub const BUCKET_LOCATION: &str = "US";

/// Handle to a bucket that is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketHandle {
    name: String,
}

impl BucketHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Blob storage backend.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Resolve an existing bucket. Missing buckets and auth failures are errors.
    async fn get_bucket(&self, name: &str) -> Result<BucketHandle>;

    /// Create a bucket with [`BUCKET_STORAGE_CLASS`] in [`BUCKET_LOCATION`].
    async fn insert_bucket(&self, name: &str) -> Result<BucketHandle>;

    /// Write `content` at `path`, replacing whatever is there.
    async fn upload_blob(
        &self,
        bucket: &BucketHandle,
        path: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<()>;
}

/// Create a bucket, logging the outcome. Returns `None` on any error.
pub async fn create_bucket(store: &dyn ObjectStore, name: &str) -> Option<BucketHandle> {
    match store.insert_bucket(name).await {
        Ok(bucket) => {
            tracing::info!(bucket = %bucket.name(), "Bucket {} created", bucket.name());
            Some(bucket)
        }
        Err(e) => {
            tracing::error!(bucket = name, error = %e, "Error creating bucket");
            None
        }
    }
}

/// Build the configured object store.
pub async fn connect(config: &Config) -> Result<Arc<dyn ObjectStore>> {
    match config.storage_backend {
        StorageBackend::Gcs => {
            let store = GcsStore::new(&config.gcp_project_id).await?;
            tracing::info!(project = %config.gcp_project_id, "Cloud Storage client initialized");
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory object store, uploads are not persisted");
            Ok(Arc::new(MemoryStore::with_bucket(&config.target_bucket)))
        }
    }
}
