// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod football;
pub mod gcs;
pub mod memory_store;
pub mod storage;
pub mod worker;

pub use football::FootballClient;
pub use gcs::GcsStore;
pub use memory_store::{MemoryStore, StoredBlob};
pub use storage::{create_bucket, BucketHandle, ObjectStore};
pub use worker::{RunReport, Worker, WorkerSettings};
