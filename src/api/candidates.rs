// src/api/candidates.rs
//! Candidates API service - typed wrappers over the candidate endpoints.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::{candidate_endpoint, candidate_position_endpoint, CANDIDATES_ENDPOINT};
use crate::error::ApiError;
use crate::types::model::CandidateStatus;
use crate::types::wire::{AckMessage, CandidateDetailRecord, CandidatesResponse};

/// Optional list filters. Absent, empty, and zero values are omitted from
/// the query string entirely, matching what the backend expects.
#[derive(Debug, Clone, Default)]
pub struct CandidateQuery {
    pub status: Option<CandidateStatus>,
    pub search: Option<String>,
    pub position_id: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl CandidateQuery {
    pub fn with_status(status: CandidateStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search".to_string(), search.to_string()));
        }
        if let Some(position_id) = self.position_id.as_deref().filter(|s| !s.is_empty()) {
            query.push(("positionId".to_string(), position_id.to_string()));
        }
        if let Some(limit) = self.limit.filter(|&n| n > 0) {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset.filter(|&n| n > 0) {
            query.push(("offset".to_string(), offset.to_string()));
        }
        query
    }
}

pub struct CandidateService {
    client: Arc<ApiClient>,
}

impl CandidateService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &CandidateQuery) -> Result<CandidatesResponse, ApiError> {
        self.client
            .get_with_query(CANDIDATES_ENDPOINT, &query.to_query())
            .await
    }

    /// Detail fetch. A missing candidate is the client's ordinary 404.
    pub async fn get(&self, id: &str) -> Result<CandidateDetailRecord, ApiError> {
        self.client.get(&candidate_endpoint(id)).await
    }

    pub async fn add_position(
        &self,
        candidate_id: &str,
        position_id: &str,
    ) -> Result<AckMessage, ApiError> {
        self.client
            .post(&candidate_position_endpoint(candidate_id, position_id))
            .await
    }

    pub async fn remove_position(
        &self,
        candidate_id: &str,
        position_id: &str,
    ) -> Result<AckMessage, ApiError> {
        self.client
            .delete(&candidate_position_endpoint(candidate_id, position_id))
            .await
    }
}
