//! Application configuration loaded from environment variables.
//!
//! Everything has a default so the worker can start inside the container
//! with no environment at all; `.env` is honored for local development.

use std::env;
use std::str::FromStr;

/// Base URL of the football API (Cloud Run).
pub const DEFAULT_FOOTBALL_API_URL: &str =
    "https://footballapi-936574418751.us-central1.run.app/api/football";

/// Bucket that receives the fixtures and standings blobs.
pub const DEFAULT_TARGET_BUCKET: &str = "archonph-footballapi-2024";

/// Top-level prefix for every blob written by the worker.
pub const DEFAULT_BLOB_ROOT: &str = "footballapi";

/// Service account key location inside the container.
pub const DEFAULT_CREDENTIALS_PATH: &str = "/app/service_account.json";

/// Variable read by the Google auth libraries.
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Which object store implementation backs uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Google Cloud Storage
    Gcs,
    /// Process-local store, nothing is persisted
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gcs" => Ok(Self::Gcs),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid {
                name: "STORAGE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Football API base URL, without trailing slash
    pub football_api_url: String,
    /// Bucket the worker uploads into
    pub target_bucket: String,
    /// Prefix for all blob paths
    pub blob_root: String,
    /// Path to the service account key file
    pub credentials_path: String,
    /// GCP project ID (needed when creating buckets)
    pub gcp_project_id: String,
    /// Object store implementation
    pub storage_backend: StorageBackend,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            port: get("PORT", "8080").parse().unwrap_or(8080),
            football_api_url: get("FOOTBALL_API_URL", DEFAULT_FOOTBALL_API_URL)
                .trim_end_matches('/')
                .to_string(),
            target_bucket: get("TARGET_BUCKET", DEFAULT_TARGET_BUCKET),
            blob_root: get("BLOB_ROOT", DEFAULT_BLOB_ROOT)
                .trim_matches('/')
                .to_string(),
            credentials_path: get(CREDENTIALS_ENV, DEFAULT_CREDENTIALS_PATH),
            gcp_project_id: get("GCP_PROJECT_ID", "local-dev"),
            storage_backend: get("STORAGE_BACKEND", "gcs").parse()?,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            football_api_url: "http://127.0.0.1:9/api/football".to_string(),
            target_bucket: DEFAULT_TARGET_BUCKET.to_string(),
            blob_root: DEFAULT_BLOB_ROOT.to_string(),
            credentials_path: DEFAULT_CREDENTIALS_PATH.to_string(),
            gcp_project_id: "test-project".to_string(),
            storage_backend: StorageBackend::Memory,
        }
    }

    /// Point the Google auth libraries at the key file unless the
    /// environment already does. Must run before any storage client is built.
    pub fn export_credentials_path(&self) {
        if env::var_os(CREDENTIALS_ENV).is_none() {
            tracing::info!(path = %self.credentials_path, "Using default service account key");
            env::set_var(CREDENTIALS_ENV, &self.credentials_path);
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
