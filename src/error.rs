// src/error.rs
//! Error taxonomy for the API client.
//!
//! A 401 is its own variant because it carries a side effect (the token
//! store is cleared before the error is returned) and callers route it to
//! a re-login path. Every other non-2xx lands in `Http` with whatever the
//! backend sent; transport failures stay distinct so callers can tell a
//! dead server from an unhappy one.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 401. Stored credentials have been cleared.
    #[error("authentication required")]
    Unauthenticated,

    /// Any other non-2xx response.
    #[error("API error: {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        body: serde_json::Value,
    },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response parsed as JSON but a field held a value the data model
    /// rejects (e.g. an unknown status string).
    #[error("invalid record: {0}")]
    Decode(#[from] crate::types::model::StatusParseError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(_) => None,
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}
