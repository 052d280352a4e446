// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Worker pass tests against a fake football API.

use footballapi_worker::config::{Config, DEFAULT_TARGET_BUCKET};
use footballapi_worker::services::{FootballClient, MemoryStore, RunReport, Worker, WorkerSettings};
use serde_json::json;
use std::sync::Arc;

mod common;

use common::FakeUpstream;

fn worker_for(api_url: &str, store: Arc<MemoryStore>) -> Worker {
    Worker::new(
        FootballClient::new(api_url),
        store,
        WorkerSettings::from(&Config::test_default()),
    )
}

#[tokio::test]
async fn test_report_counts_placeholders() {
    let api = FakeUpstream::new()
        .json(
            "/leagues",
            json!([{"id": 39, "name": "Premier League"}, {"id": 61, "name": "Ligue 1"}]),
        )
        .json("/fixtures/39", json!([{"match": "A vs B"}]))
        .json("/standings/39", json!([{"team": "A", "pts": 10}]))
        // Nothing registered for league 61
        .spawn()
        .await;
    let store = Arc::new(MemoryStore::with_bucket(DEFAULT_TARGET_BUCKET));

    let report = worker_for(&api, store.clone()).run().await.unwrap();

    assert_eq!(
        report,
        RunReport {
            leagues_unavailable: false,
            leagues_processed: 2,
            blobs_written: 4,
            placeholders: 2,
            fragment_collisions: 0,
        }
    );
    assert!(!report.is_complete());
    assert_eq!(
        store
            .blob(DEFAULT_TARGET_BUCKET, "footballapi/ligue-1-bucket/standings/Ligue 1.json")
            .unwrap()
            .text(),
        "[]"
    );
}

#[tokio::test]
async fn test_string_ids_used_in_urls() {
    let api = FakeUpstream::new()
        .json("/leagues", json!([{"id": "PL", "name": "Premier League"}]))
        .json("/fixtures/PL", json!([1, 2, 3]))
        .json("/standings/PL", json!([4]))
        .spawn()
        .await;
    let store = Arc::new(MemoryStore::with_bucket(DEFAULT_TARGET_BUCKET));

    let report = worker_for(&api, store.clone()).run().await.unwrap();

    assert!(report.is_complete());
    assert_eq!(
        store
            .blob(
                DEFAULT_TARGET_BUCKET,
                "footballapi/premier-league-bucket/fixtures/Premier League.json"
            )
            .unwrap()
            .text(),
        "[1,2,3]"
    );
}

#[tokio::test]
async fn test_colliding_names_are_reported() {
    let api = FakeUpstream::new()
        .json(
            "/leagues",
            json!([{"id": 1, "name": "Serie A"}, {"id": 2, "name": "serie a"}]),
        )
        .json("/fixtures/1", json!(["first"]))
        .json("/standings/1", json!([]))
        .json("/fixtures/2", json!(["second"]))
        .json("/standings/2", json!([]))
        .spawn()
        .await;
    let store = Arc::new(MemoryStore::with_bucket(DEFAULT_TARGET_BUCKET));

    let report = worker_for(&api, store.clone()).run().await.unwrap();

    assert_eq!(report.fragment_collisions, 1);
    assert_eq!(report.blobs_written, 4);
    assert_eq!(
        store.blob_paths(DEFAULT_TARGET_BUCKET),
        vec![
            "footballapi/serie-a-bucket/fixtures/Serie A.json",
            "footballapi/serie-a-bucket/fixtures/serie a.json",
            "footballapi/serie-a-bucket/standings/Serie A.json",
            "footballapi/serie-a-bucket/standings/serie a.json",
        ]
    );
}

#[tokio::test]
async fn test_empty_league_list_is_complete() {
    let api = FakeUpstream::new().json("/leagues", json!([])).spawn().await;
    let store = Arc::new(MemoryStore::with_bucket(DEFAULT_TARGET_BUCKET));

    let report = worker_for(&api, store.clone()).run().await.unwrap();

    assert_eq!(report, RunReport::default());
    assert_eq!(store.upload_count(), 0);
}

#[tokio::test]
async fn test_missing_bucket_checked_even_without_leagues() {
    let api = FakeUpstream::new().json("/leagues", json!([])).spawn().await;

    let result = worker_for(&api, Arc::new(MemoryStore::new())).run().await;

    assert!(result.is_err());
}
