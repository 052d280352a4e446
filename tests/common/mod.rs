// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use footballapi_worker::config::Config;
use footballapi_worker::routes::create_router;
use footballapi_worker::services::{FootballClient, MemoryStore};
use footballapi_worker::AppState;
use std::collections::HashMap;
use std::sync::Arc;

/// Path prefix the fake API is mounted under.
pub const API_PREFIX: &str = "/api/football";

/// Canned football API served from a local listener.
/// Unregistered paths answer 404.
#[derive(Default)]
pub struct FakeUpstream {
    routes: HashMap<String, (StatusCode, String)>,
}

#[allow(dead_code)]
impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with 200 at `path` (relative to the API prefix).
    pub fn json(self, path: &str, body: serde_json::Value) -> Self {
        self.raw(path, StatusCode::OK, &body.to_string())
    }

    pub fn raw(mut self, path: &str, status: StatusCode, body: &str) -> Self {
        self.routes
            .insert(format!("{}{}", API_PREFIX, path), (status, body.to_string()));
        self
    }

    /// Start serving and return the API base URL.
    pub async fn spawn(self) -> String {
        let routes = Arc::new(self.routes);

        let app = axum::Router::new().fallback(move |uri: Uri| {
            let routes = Arc::clone(&routes);
            async move {
                match routes.get(uri.path()) {
                    Some((status, body)) => (
                        *status,
                        [(header::CONTENT_TYPE, "application/json")],
                        body.clone(),
                    )
                        .into_response(),
                    None => StatusCode::NOT_FOUND.into_response(),
                }
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}{}", addr, API_PREFIX)
    }
}

/// Create a test app against `api_url` with an in-memory store.
/// Returns the router, the shared state and the store.
#[allow(dead_code)]
pub fn create_test_app(
    api_url: &str,
    store: MemoryStore,
) -> (axum::Router, Arc<AppState>, Arc<MemoryStore>) {
    let config = Config {
        football_api_url: api_url.to_string(),
        ..Config::test_default()
    };
    let store = Arc::new(store);

    let state = Arc::new(AppState {
        football: FootballClient::new(&config.football_api_url),
        config,
        store: store.clone(),
    });

    (create_router(state.clone()), state, store)
}

/// Test app whose store already holds the target bucket.
#[allow(dead_code)]
pub fn create_default_test_app(api_url: &str) -> (axum::Router, Arc<AppState>, Arc<MemoryStore>) {
    create_test_app(
        api_url,
        MemoryStore::with_bucket(footballapi_worker::config::DEFAULT_TARGET_BUCKET),
    )
}
