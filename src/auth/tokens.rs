// src/auth/tokens.rs
//! Persistent bearer credential storage.
//!
//! The access/refresh pair lives in a single JSON file so both values are
//! written and cleared together. There is no expiry tracking; an absent
//! pair is the only "not logged in" signal, and a file that cannot be read
//! or parsed counts as absent.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTokens {
    access_token: String,
    refresh_token: String,
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persist an access/refresh pair, replacing any previous one.
    pub fn store(&self, access_token: &str, refresh_token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let stored = StoredTokens {
            access_token: access_token.to_string(),
            refresh_token: refresh_token.to_string(),
        };
        let content = serde_json::to_string(&stored)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write token file: {}", self.path.display()))?;

        debug!("Stored tokens to {}", self.path.display());
        Ok(())
    }

    pub fn access(&self) -> Option<String> {
        self.read().map(|t| t.access_token)
    }

    pub fn refresh(&self) -> Option<String> {
        self.read().map(|t| t.refresh_token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.access().is_some()
    }

    /// Remove both tokens. Removing an already-absent file is not an error.
    pub fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                debug!("Failed to remove token file {}: {}", self.path.display(), e);
            }
        }
    }

    fn read(&self) -> Option<StoredTokens> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }
}
