// src/types/model.rs
//! View models - the shapes the embedding UI consumes.
//!
//! These are read-mostly copies built by the mappers. Nothing mutates a
//! mapped `Candidate` or `Position` in place; updates go through the API
//! and a re-fetch.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown {kind} status: {value}")]
pub struct StatusParseError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CandidateStatus {
    Active,
    Inactive,
    Hired,
}

impl From<CandidateStatus> for String {
    fn from(status: CandidateStatus) -> Self {
        status.to_string()
    }
}

impl TryFrom<String> for CandidateStatus {
    type Error = StatusParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for CandidateStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(CandidateStatus::Active),
            "Inactive" => Ok(CandidateStatus::Inactive),
            "Hired" => Ok(CandidateStatus::Hired),
            other => Err(StatusParseError {
                kind: "candidate",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateStatus::Active => write!(f, "Active"),
            CandidateStatus::Inactive => write!(f, "Inactive"),
            CandidateStatus::Hired => write!(f, "Hired"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PositionStatus {
    Open,
    Closed,
    OnHold,
}

impl From<PositionStatus> for String {
    fn from(status: PositionStatus) -> Self {
        status.to_string()
    }
}

impl TryFrom<String> for PositionStatus {
    type Error = StatusParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for PositionStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(PositionStatus::Open),
            "Closed" => Ok(PositionStatus::Closed),
            "On Hold" => Ok(PositionStatus::OnHold),
            other => Err(StatusParseError {
                kind: "position",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionStatus::Open => write!(f, "Open"),
            PositionStatus::Closed => write!(f, "Closed"),
            PositionStatus::OnHold => write!(f, "On Hold"),
        }
    }
}

/// Skill proficiency. Unknown wire values are preserved rather than
/// rejected so one odd skill cannot sink a whole candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Other(String),
}

impl SkillLevel {
    pub fn parse(s: &str) -> Self {
        match s {
            "Beginner" => SkillLevel::Beginner,
            "Intermediate" => SkillLevel::Intermediate,
            "Advanced" => SkillLevel::Advanced,
            "Expert" => SkillLevel::Expert,
            other => SkillLevel::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLevel::Beginner => write!(f, "Beginner"),
            SkillLevel::Intermediate => write!(f, "Intermediate"),
            SkillLevel::Advanced => write!(f, "Advanced"),
            SkillLevel::Expert => write!(f, "Expert"),
            SkillLevel::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        level.to_string()
    }
}

impl From<String> for SkillLevel {
    fn from(value: String) -> Self {
        SkillLevel::parse(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DocumentType {
    Cv,
    Resume,
    CoverLetter,
    Other(String),
}

impl DocumentType {
    pub fn parse(s: &str) -> Self {
        match s {
            "CV" => DocumentType::Cv,
            "Resume" => DocumentType::Resume,
            "Cover Letter" => DocumentType::CoverLetter,
            other => DocumentType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Cv => write!(f, "CV"),
            DocumentType::Resume => write!(f, "Resume"),
            DocumentType::CoverLetter => write!(f, "Cover Letter"),
            DocumentType::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<DocumentType> for String {
    fn from(kind: DocumentType) -> Self {
        kind.to_string()
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        DocumentType::parse(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    pub sort_order: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: Option<String>,
    pub sort_order: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    pub sort_order: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub kind: DocumentType,
    pub path: String,
    pub upload_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub status: CandidateStatus,
    pub applied_positions: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub documents: Vec<Document>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRequirements {
    pub experience: String,
    pub education: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub title: String,
    pub department: String,
    pub status: PositionStatus,
    pub description: String,
    pub requirements: PositionRequirements,
    pub candidates: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
