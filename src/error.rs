// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Football API error: {0}")]
    UpstreamApi(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Malformed league record at index {index}: {reason}")]
    MalformedLeague { index: usize, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Upstream failures are tolerated by the worker; everything else aborts a pass.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::UpstreamApi(_))
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            // The worker absorbs upstream failures; this covers handlers that don't.
            AppError::UpstreamApi(msg) => {
                (StatusCode::BAD_GATEWAY, "upstream_error", Some(msg.clone()))
            }
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error", None)
            }
            AppError::MalformedLeague { index, reason } => {
                tracing::error!(index, reason = %reason, "Malformed league record");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "malformed_league",
                    Some(self.to_string()),
                )
            }
            AppError::Serialization(err) => {
                tracing::error!(error = %err, "Serialization error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
