// src/store.rs
//! Caching data-access facade.
//!
//! `DataStore` owns two independent list caches, each either empty or
//! fully populated (no partial or paged state). The caches are filled by
//! `fetch_candidates` / `fetch_positions` and invalidated only by an
//! explicit `clear_cache`: mutations do NOT invalidate automatically, so
//! callers must clear after any write for subsequent reads to see it.
//!
//! Concurrent identical fetches are not deduplicated. Two callers can both
//! miss the cache and both hit the network; the last response to arrive
//! wins the cache slot, which is benign since list responses for the same
//! filter are equivalent.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::{CandidateQuery, CandidateService, PositionQuery, PositionService, PositionUpdate};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::mappers::{
    map_candidate_detail, map_candidate_summaries, map_position, map_positions,
};
use crate::types::model::{Candidate, CandidateStatus, Position, PositionStatus};

/// Outcome of a detail lookup. A real 404 and a transport failure are
/// distinct cases; callers that only want an "is it there" answer can
/// collapse this with [`Lookup::found`].
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Failed(ApiError),
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }
}

pub struct DataStore {
    candidates: CandidateService,
    positions: PositionService,
    candidate_cache: RwLock<Option<Vec<Candidate>>>,
    position_cache: RwLock<Option<Vec<Position>>>,
}

impl DataStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            candidates: CandidateService::new(client.clone()),
            positions: PositionService::new(client),
            candidate_cache: RwLock::new(None),
            position_cache: RwLock::new(None),
        }
    }

    /// The active-candidate list, from cache when populated. Records that
    /// fail to map are dropped, not cached as holes.
    pub async fn fetch_candidates(&self) -> Result<Vec<Candidate>, ApiError> {
        if let Some(cached) = self.candidate_cache.read().await.clone() {
            debug!("Candidate cache hit ({} entries)", cached.len());
            return Ok(cached);
        }

        let response = self
            .candidates
            .list(&CandidateQuery::with_status(CandidateStatus::Active))
            .await?;
        let mapped = map_candidate_summaries(&response.candidates);
        *self.candidate_cache.write().await = Some(mapped.clone());
        Ok(mapped)
    }

    /// The open-position list, from cache when populated.
    pub async fn fetch_positions(&self) -> Result<Vec<Position>, ApiError> {
        if let Some(cached) = self.position_cache.read().await.clone() {
            debug!("Position cache hit ({} entries)", cached.len());
            return Ok(cached);
        }

        let response = self
            .positions
            .list(&PositionQuery::with_status(PositionStatus::Open))
            .await?;
        let mapped = map_positions(&response.positions);
        *self.position_cache.write().await = Some(mapped.clone());
        Ok(mapped)
    }

    /// Empty both caches. Call after any mutation.
    pub async fn clear_cache(&self) {
        *self.candidate_cache.write().await = None;
        *self.position_cache.write().await = None;
        debug!("List caches cleared");
    }

    /// Fresh detail fetch, never served from cache.
    pub async fn get_candidate(&self, id: &str) -> Lookup<Candidate> {
        match self.candidates.get(id).await {
            Ok(record) => match map_candidate_detail(&record) {
                Ok(candidate) => Lookup::Found(candidate),
                Err(e) => {
                    warn!("Candidate {} failed to map: {}", id, e);
                    Lookup::Failed(e.into())
                }
            },
            Err(e) if e.is_not_found() => Lookup::NotFound,
            Err(e) => {
                warn!("Candidate {} fetch failed: {}", id, e);
                Lookup::Failed(e)
            }
        }
    }

    /// Fresh detail fetch, never served from cache.
    pub async fn get_position(&self, id: &str) -> Lookup<Position> {
        match self.positions.get(id).await {
            Ok(record) => match map_position(&record) {
                Ok(position) => Lookup::Found(position),
                Err(e) => {
                    warn!("Position {} failed to map: {}", id, e);
                    Lookup::Failed(e.into())
                }
            },
            Err(e) if e.is_not_found() => Lookup::NotFound,
            Err(e) => {
                warn!("Position {} fetch failed: {}", id, e);
                Lookup::Failed(e)
            }
        }
    }

    /// Active candidates whose applied-position list contains `position_id`.
    /// Filtered client-side over the cached list, the same strategy as the
    /// inverse query below.
    pub async fn candidates_for_position(
        &self,
        position_id: &str,
    ) -> Result<Vec<Candidate>, ApiError> {
        let candidates = self.fetch_candidates().await?;
        Ok(candidates
            .into_iter()
            .filter(|c| c.applied_positions.iter().any(|p| p == position_id))
            .collect())
    }

    /// Open positions the candidate has applied to. An unknown candidate
    /// yields an empty list.
    pub async fn positions_for_candidate(
        &self,
        candidate_id: &str,
    ) -> Result<Vec<Position>, ApiError> {
        let candidates = self.fetch_candidates().await?;
        let Some(candidate) = candidates.iter().find(|c| c.id == candidate_id) else {
            return Ok(Vec::new());
        };

        let positions = self.fetch_positions().await?;
        Ok(positions
            .into_iter()
            .filter(|p| candidate.applied_positions.iter().any(|id| *id == p.id))
            .collect())
    }

    /// Search active candidates. With a query and no position filter the
    /// backend's search ranking does the work; otherwise the cached active
    /// set is filtered client-side (case-insensitive substring, OR across
    /// name, email, skill names, and company names), intersected with the
    /// position filter when one is present.
    pub async fn search_candidates(
        &self,
        query: &str,
        position_filter: Option<&str>,
    ) -> Result<Vec<Candidate>, ApiError> {
        if position_filter.is_none() && !query.is_empty() {
            let response = self
                .candidates
                .list(&CandidateQuery {
                    status: Some(CandidateStatus::Active),
                    search: Some(query.to_string()),
                    ..CandidateQuery::default()
                })
                .await?;
            return Ok(map_candidate_summaries(&response.candidates));
        }

        let mut results = self.fetch_candidates().await?;

        if let Some(position_id) = position_filter {
            results.retain(|c| c.applied_positions.iter().any(|p| p == position_id));
        }

        if query.is_empty() {
            return Ok(results);
        }

        let needle = query.to_lowercase();
        results.retain(|c| candidate_matches(c, &needle));
        Ok(results)
    }

    /// Link a candidate to a position. Does not touch the caches; call
    /// `clear_cache` for subsequent reads to reflect the change.
    pub async fn assign_position(
        &self,
        candidate_id: &str,
        position_id: &str,
    ) -> Result<String, ApiError> {
        let ack = self
            .candidates
            .add_position(candidate_id, position_id)
            .await?;
        Ok(ack.message)
    }

    /// Unlink a candidate from a position. Caches are not invalidated.
    pub async fn unassign_position(
        &self,
        candidate_id: &str,
        position_id: &str,
    ) -> Result<String, ApiError> {
        let ack = self
            .candidates
            .remove_position(candidate_id, position_id)
            .await?;
        Ok(ack.message)
    }

    /// Partial position update. Caches are not invalidated.
    pub async fn update_position(
        &self,
        id: &str,
        update: &PositionUpdate,
    ) -> Result<Position, ApiError> {
        let record = self.positions.update(id, update).await?;
        Ok(map_position(&record)?)
    }
}

/// `needle` must already be lowercased.
fn candidate_matches(candidate: &Candidate, needle: &str) -> bool {
    let full_name = candidate.full_name().to_lowercase();
    if full_name.contains(needle) {
        return true;
    }
    if candidate.email.to_lowercase().contains(needle) {
        return true;
    }
    let skills = candidate
        .skills
        .iter()
        .map(|s| s.name.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    if skills.contains(needle) {
        return true;
    }
    let companies = candidate
        .experience
        .iter()
        .map(|e| e.company.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    companies.contains(needle)
}
