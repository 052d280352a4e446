// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! footballapi-worker server
//!
//! Exposes `POST /trigger-worker`, which archives fixtures and standings for
//! every league into Cloud Storage.

use anyhow::Context;
use footballapi_worker::{config::Config, logging, services, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging for GCP
    logging::init();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    config.export_credentials_path();
    tracing::info!(
        port = config.port,
        api = %config.football_api_url,
        bucket = %config.target_bucket,
        "Starting footballapi-worker"
    );

    // Storage client is built once and shared by all triggers
    let store = services::storage::connect(&config)
        .await
        .context("Failed to initialize object storage")?;

    let football = services::FootballClient::new(&config.football_api_url);

    let state = Arc::new(AppState {
        config: config.clone(),
        football,
        store,
    });

    let app = footballapi_worker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
