// src/config.rs
//! API configuration - base URL resolution and endpoint templates

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
pub const REFRESH_ENDPOINT: &str = "/api/v1/auth/refresh";
pub const ME_ENDPOINT: &str = "/api/v1/auth/me";
pub const CANDIDATES_ENDPOINT: &str = "/api/v1/candidates";
pub const POSITIONS_ENDPOINT: &str = "/api/v1/positions";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const TOKEN_FILE_NAME: &str = "tokens.json";

/// Detail endpoint for a single candidate.
pub fn candidate_endpoint(id: &str) -> String {
    format!("{CANDIDATES_ENDPOINT}/{id}")
}

/// Composite endpoint linking a candidate to a position.
pub fn candidate_position_endpoint(candidate_id: &str, position_id: &str) -> String {
    format!("{CANDIDATES_ENDPOINT}/{candidate_id}/positions/{position_id}")
}

/// Detail/update endpoint for a single position.
pub fn position_endpoint(id: &str) -> String {
    format!("{POSITIONS_ENDPOINT}/{id}")
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_file: PathBuf,
}

impl ApiConfig {
    /// Load configuration from the environment, falling back to the local
    /// development backend.
    pub fn load() -> Result<Self> {
        let base_url =
            std::env::var("HELLIO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let token_file = match std::env::var("HELLIO_TOKEN_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => Self::default_token_file()?,
        };

        info!("API base URL: {}", base_url);

        Ok(Self {
            base_url: normalize_base_url(base_url),
            token_file,
        })
    }

    pub fn with_base_url(base_url: impl Into<String>, token_file: PathBuf) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            token_file,
        }
    }

    fn default_token_file() -> Result<PathBuf> {
        let dir = dirs::data_dir()
            .context("Could not determine a user data directory for token storage")?;
        Ok(dir.join("hellio").join(TOKEN_FILE_NAME))
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
