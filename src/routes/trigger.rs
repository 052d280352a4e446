// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Worker trigger route.
//!
//! Runs the whole pass inside the request; the reply is sent once it is done.

use crate::error::Result;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Acknowledgement returned after every successful pass.
pub const TRIGGER_ACK: &str = "Worker triggered successfully";

#[derive(Debug, Serialize, Deserialize)]
pub struct TriggerResponse {
    pub message: String,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/trigger-worker", post(trigger_worker))
}

/// Run the worker and acknowledge.
async fn trigger_worker(State(state): State<Arc<AppState>>) -> Result<Json<TriggerResponse>> {
    tracing::info!("Worker triggered");

    let report = state.worker().run().await?;

    if !report.is_complete() {
        tracing::warn!(
            leagues_unavailable = report.leagues_unavailable,
            placeholders = report.placeholders,
            "Worker pass finished with missing upstream data"
        );
    }

    Ok(Json(TriggerResponse {
        message: TRIGGER_ACK.to_string(),
    }))
}
