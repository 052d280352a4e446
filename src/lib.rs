// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! footballapi-worker: archive football league data to Cloud Storage
//!
//! On each trigger the worker pulls the league list from the football API
//! and stores every league's fixtures and standings as JSON blobs.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{FootballClient, ObjectStore, Worker, WorkerSettings};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub football: FootballClient,
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Worker wired to this state's clients.
    pub fn worker(&self) -> Worker {
        Worker::new(
            self.football.clone(),
            Arc::clone(&self.store),
            WorkerSettings::from(&self.config),
        )
    }
}
