// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Google Cloud Storage backend.
//!
//! Uses the official google-cloud-storage SDK: `StorageControl` for bucket
//! metadata, `Storage` for object writes. Credentials come from
//! `GOOGLE_APPLICATION_CREDENTIALS`.

use crate::error::{AppError, Result};
use crate::services::storage::{BucketHandle, ObjectStore, BUCKET_LOCATION, BUCKET_STORAGE_CLASS};
use async_trait::async_trait;
use axum::body::Bytes;
use google_cloud_storage::client::{Storage, StorageControl};
use google_cloud_storage::model::Bucket;

/// Cloud Storage client wrapper.
#[derive(Clone)]
pub struct GcsStore {
    storage: Storage,
    control: StorageControl,
    project_id: String,
}

impl GcsStore {
    /// Connect to Cloud Storage. `project_id` owns buckets created through this store.
    pub async fn new(project_id: &str) -> Result<Self> {
        let storage = Storage::builder()
            .build()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create Storage client: {}", e)))?;

        let control = StorageControl::builder().build().await.map_err(|e| {
            AppError::Storage(format!("Failed to create StorageControl client: {}", e))
        })?;

        Ok(Self {
            storage,
            control,
            project_id: project_id.to_string(),
        })
    }

    /// Full resource name, `projects/_/buckets/{bucket}`.
    fn resource_name(bucket: &str) -> String {
        format!("projects/_/buckets/{}", bucket)
    }
}

#[async_trait]
impl ObjectStore for GcsStore {
    async fn get_bucket(&self, name: &str) -> Result<BucketHandle> {
        let bucket = self
            .control
            .get_bucket()
            .set_name(Self::resource_name(name))
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to get bucket {}: {}", name, e)))?;

        tracing::debug!(bucket = name, location = %bucket.location, "Resolved bucket");
        Ok(BucketHandle::new(name))
    }

    async fn insert_bucket(&self, name: &str) -> Result<BucketHandle> {
        let bucket = Bucket::new()
            .set_project(format!("projects/{}", self.project_id))
            .set_location(BUCKET_LOCATION)
            .set_storage_class(BUCKET_STORAGE_CLASS);

        self.control
            .create_bucket()
            .set_parent("projects/_")
            .set_bucket_id(name)
            .set_bucket(bucket)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create bucket {}: {}", name, e)))?;

        Ok(BucketHandle::new(name))
    }

    async fn upload_blob(
        &self,
        bucket: &BucketHandle,
        path: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<()> {
        let size = content.len();

        self.storage
            .write_object(Self::resource_name(bucket.name()), path, content)
            .set_content_type(content_type)
            .send_buffered()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload {}: {}", path, e)))?;

        tracing::debug!(bucket = %bucket.name(), path, size, "Uploaded blob");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_name_format() {
        assert_eq!(
            GcsStore::resource_name("archonph-footballapi-2024"),
            "projects/_/buckets/archonph-footballapi-2024"
        );
    }
}
