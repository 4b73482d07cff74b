// src/api/positions.rs
//! Positions API service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ApiClient;
use crate::config::{position_endpoint, POSITIONS_ENDPOINT};
use crate::error::ApiError;
use crate::types::model::PositionStatus;
use crate::types::wire::{PositionRecord, PositionsResponse};

#[derive(Debug, Clone, Default)]
pub struct PositionQuery {
    pub status: Option<PositionStatus>,
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PositionQuery {
    pub fn with_status(status: PositionStatus) -> Self {
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
        if let Some(limit) = self.limit.filter(|&n| n > 0) {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset.filter(|&n| n > 0) {
            query.push(("offset".to_string(), offset.to_string()));
        }
        query
    }
}

/// Partial update payload. Only supplied fields are serialized, so the
/// backend leaves everything else untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PositionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
}

pub struct PositionService {
    client: Arc<ApiClient>,
}

impl PositionService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &PositionQuery) -> Result<PositionsResponse, ApiError> {
        self.client
            .get_with_query(POSITIONS_ENDPOINT, &query.to_query())
            .await
    }

    pub async fn get(&self, id: &str) -> Result<PositionRecord, ApiError> {
        self.client.get(&position_endpoint(id)).await
    }

    pub async fn update(
        &self,
        id: &str,
        update: &PositionUpdate,
    ) -> Result<PositionRecord, ApiError> {
        self.client.put_json(&position_endpoint(id), update).await
    }
}
