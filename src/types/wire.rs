// src/types/wire.rs
//! Wire records - the JSON shapes the backend returns, mirrored field for
//! field. View models live in [`crate::types::model`]; nothing outside the
//! mappers should consume these directly.

use serde::{Deserialize, Serialize};

// ===== Auth =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub is_active: bool,
}

// ===== Candidates =====

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummaryRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub status: String,
    pub years_of_experience: f64,
    pub sort_order: i64,
    pub skills: Vec<SkillRecord>,
    pub applied_positions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetailRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub status: String,
    pub years_of_experience: f64,
    pub sort_order: i64,
    pub experience: Vec<ExperienceRecord>,
    pub education: Vec<EducationRecord>,
    pub skills: Vec<SkillRecord>,
    pub documents: Vec<DocumentRecord>,
    pub applied_positions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatesResponse {
    pub candidates: Vec<CandidateSummaryRecord>,
    pub total: u64,
}

// ===== Positions =====

/// List and detail responses share one shape on the position side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    pub required_skills: Vec<String>,
    pub min_experience_years: u32,
    pub status: String,
    pub posted_date: String,
    pub candidates: Vec<String>,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionsResponse {
    pub positions: Vec<PositionRecord>,
    pub total: u64,
}

// ===== Misc =====

#[derive(Debug, Clone, Deserialize)]
pub struct AckMessage {
    pub message: String,
}
