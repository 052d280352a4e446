// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Create a COLDLINE bucket in the US multi-region.
//!
//! Usage: `create-bucket <bucket-name>`

use anyhow::Context;
use footballapi_worker::{config::Config, logging, services};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let name = std::env::args()
        .nth(1)
        .context("usage: create-bucket <bucket-name>")?;

    let config = Config::from_env().context("Failed to load configuration")?;
    config.export_credentials_path();

    let store = services::storage::connect(&config)
        .await
        .context("Failed to initialize object storage")?;

    match services::create_bucket(store.as_ref(), &name).await {
        Some(_) => Ok(()),
        None => anyhow::bail!("Bucket {} was not created", name),
    }
}
