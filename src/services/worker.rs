// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! League archiving pass.
//!
//! Handles the core workflow:
//! 1. Fetch the league list (failure means an empty list)
//! 2. Validate every league record
//! 3. Resolve the target bucket
//! 4. Per league, fetch fixtures and standings and upload both as JSON
//!
//! Leagues are processed one after another. A failed fixtures or standings
//! fetch is stored as `[]`; storage and validation errors abort the pass.

use crate::config::Config;
use crate::error::Result;
use crate::models::{Dataset, League, LeagueBlobPaths, JSON_CONTENT_TYPE};
use crate::services::storage::{BucketHandle, ObjectStore};
use crate::services::FootballClient;
use axum::body::Bytes;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Where the worker writes.
#[derive(Debug, Clone)]
pub struct WorkerSettings {
    pub target_bucket: String,
    pub blob_root: String,
}

impl From<&Config> for WorkerSettings {
    fn from(config: &Config) -> Self {
        Self {
            target_bucket: config.target_bucket.clone(),
            blob_root: config.blob_root.clone(),
        }
    }
}

/// Summary of one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// The league list could not be fetched and was treated as empty.
    pub leagues_unavailable: bool,
    /// Number of leagues archived.
    pub leagues_processed: usize,
    /// Number of blobs written.
    pub blobs_written: usize,
    /// Blobs that hold `[]` because the upstream fetch failed.
    pub placeholders: usize,
    /// Leagues whose directory fragment was already used in this pass.
    pub fragment_collisions: usize,
}

impl RunReport {
    /// Returns true if every league got real data for both datasets.
    pub fn is_complete(&self) -> bool {
        !self.leagues_unavailable && self.placeholders == 0
    }
}

/// Stored in place of a payload that could not be fetched.
fn empty_placeholder() -> Value {
    Value::Array(Vec::new())
}

/// Fetches league data and archives it to object storage.
pub struct Worker {
    football: FootballClient,
    store: Arc<dyn ObjectStore>,
    settings: WorkerSettings,
}

impl Worker {
    pub fn new(
        football: FootballClient,
        store: Arc<dyn ObjectStore>,
        settings: WorkerSettings,
    ) -> Self {
        Self {
            football,
            store,
            settings,
        }
    }

    /// Run one full pass.
    pub async fn run(&self) -> Result<RunReport> {
        let started = Instant::now();
        let mut report = RunReport::default();

        let records = match self.football.fetch_leagues().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching leagues");
                report.leagues_unavailable = true;
                Vec::new()
            }
        };

        let leagues = records
            .iter()
            .enumerate()
            .map(|(index, record)| League::from_record(index, record))
            .collect::<Result<Vec<_>>>()?;

        let bucket = self.store.get_bucket(&self.settings.target_bucket).await?;

        let mut fragments = HashSet::new();
        for league in &leagues {
            self.archive_league(&bucket, league, &mut fragments, &mut report)
                .await?;
        }

        tracing::info!(
            leagues = report.leagues_processed,
            blobs = report.blobs_written,
            placeholders = report.placeholders,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Worker pass complete"
        );

        Ok(report)
    }

    async fn archive_league(
        &self,
        bucket: &BucketHandle,
        league: &League,
        fragments: &mut HashSet<String>,
        report: &mut RunReport,
    ) -> Result<()> {
        let fixtures_url = self.football.fixtures_url(&league.id);
        let standings_url = self.football.standings_url(&league.id);
        let paths = LeagueBlobPaths::new(&self.settings.blob_root, &league.name);

        if !fragments.insert(paths.fragment.clone()) {
            tracing::warn!(
                league = %league.name,
                fragment = %paths.fragment,
                "League name collides with an earlier league"
            );
            report.fragment_collisions += 1;
        }

        // No data dependency between the two
        let (fixtures, standings) = tokio::join!(
            self.football.fetch_fixtures(&fixtures_url),
            self.football.fetch_standings(&standings_url),
        );

        for (dataset, fetched) in Dataset::ALL.into_iter().zip([fixtures, standings]) {
            let payload = match fetched {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!(
                        league = %league.name,
                        dataset = dataset.as_str(),
                        error = %e,
                        "Fetch failed, storing empty placeholder"
                    );
                    report.placeholders += 1;
                    empty_placeholder()
                }
            };

            let body = serde_json::to_vec(&payload)?;
            let path = paths.path(dataset);
            self.store
                .upload_blob(bucket, path, Bytes::from(body), JSON_CONTENT_TYPE)
                .await?;
            report.blobs_written += 1;
        }

        report.leagues_processed += 1;
        tracing::info!(league = %league.name, id = %league.id, "Archived league");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStore;

    #[test]
    fn placeholder_serializes_as_empty_list() {
        assert_eq!(serde_json::to_string(&empty_placeholder()).unwrap(), "[]");
    }

    #[test]
    fn run_report_default_is_complete() {
        assert!(RunReport::default().is_complete());
    }

    #[test]
    fn run_report_with_placeholders_is_incomplete() {
        let report = RunReport {
            leagues_processed: 1,
            blobs_written: 2,
            placeholders: 1,
            ..Default::default()
        };
        assert!(!report.is_complete());
    }

    #[test]
    fn settings_from_config() {
        let settings = WorkerSettings::from(&Config::test_default());
        assert_eq!(settings.target_bucket, "archonph-footballapi-2024");
        assert_eq!(settings.blob_root, "footballapi");
    }

    #[tokio::test]
    async fn unreachable_api_uploads_nothing() {
        let config = Config::test_default();
        let store = Arc::new(MemoryStore::with_bucket(&config.target_bucket));
        let worker = Worker::new(
            FootballClient::new(&config.football_api_url),
            store.clone(),
            WorkerSettings::from(&config),
        );

        let report = worker.run().await.unwrap();

        assert!(report.leagues_unavailable);
        assert_eq!(report.blobs_written, 0);
        assert_eq!(store.upload_count(), 0);
    }

    #[tokio::test]
    async fn missing_bucket_is_fatal() {
        let config = Config::test_default();
        let worker = Worker::new(
            FootballClient::new(&config.football_api_url),
            Arc::new(MemoryStore::new()),
            WorkerSettings::from(&config),
        );

        assert!(worker.run().await.is_err());
    }
}
