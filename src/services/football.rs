// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Football API client for leagues, fixtures and standings.
//!
//! Every call returns an explicit `Result`; whether a failure is tolerable
//! is decided by the caller. No auth headers, timeouts or retries.

use crate::error::{AppError, Result};
use crate::models::LeagueId;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Football API client.
#[derive(Clone)]
pub struct FootballClient {
    http: reqwest::Client,
    base_url: String,
}

impl FootballClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn leagues_url(&self) -> String {
        format!("{}/leagues", self.base_url)
    }

    pub fn fixtures_url(&self, league_id: &LeagueId) -> String {
        format!("{}/fixtures/{}", self.base_url, league_id)
    }

    pub fn standings_url(&self, league_id: &LeagueId) -> String {
        format!("{}/standings/{}", self.base_url, league_id)
    }

    /// Fetch the raw league records. Each element still has to be validated.
    pub async fn fetch_leagues(&self) -> Result<Vec<Value>> {
        self.get_json(&self.leagues_url()).await
    }

    /// Fetch the fixtures payload from a fully formed request URL.
    pub async fn fetch_fixtures(&self, request_url: &str) -> Result<Value> {
        self.get_json(request_url).await
    }

    /// Fetch the standings payload from a fully formed request URL.
    pub async fn fetch_standings(&self, request_url: &str) -> Result<Value> {
        self.get_json(request_url).await
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::UpstreamApi(format!("GET {} failed: {}", url, e)))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let url = response.url().to_string();

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamApi(format!(
                "HTTP {} from {}: {}",
                status, url, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::UpstreamApi(format!("Invalid JSON from {}: {}", url, e)))
    }
}
