// src/mappers.rs
//! Wire record to view-model mapping.
//!
//! Child records (experience, education, skills, documents) carry no
//! identifier on the wire, so each is assigned a synthetic id derived from
//! the parent id, the field name, and the wire-array index. The derivation
//! is deterministic: re-fetching the same candidate yields the same ids,
//! so UI keys built from them survive a refresh.

use chrono::Utc;
use tracing::warn;

use crate::types::model::{
    Candidate, CandidateStatus, Document, DocumentType, Education, Experience, Position,
    PositionRequirements, PositionStatus, Skill, SkillLevel, StatusParseError,
};
use crate::types::wire::{
    CandidateDetailRecord, CandidateSummaryRecord, DocumentRecord, EducationRecord,
    ExperienceRecord, PositionRecord, SkillRecord,
};

/// Split a full name: the first whitespace-delimited token is the first
/// name, the rest joined by single spaces is the last name. A single-token
/// name yields an empty last name.
pub fn split_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let rest: Vec<&str> = parts.collect();
    (first, rest.join(" "))
}

fn child_id(parent_id: &str, field: &str, index: usize) -> String {
    format!("{parent_id}-{field}-{index}")
}

fn map_experience(parent_id: &str, record: &ExperienceRecord, index: usize) -> Experience {
    Experience {
        id: child_id(parent_id, "exp", index),
        company: record.company.clone(),
        title: record.title.clone(),
        start_date: record.start_date.clone(),
        end_date: record.end_date.clone(),
        description: record.description.clone(),
        sort_order: index,
    }
}

fn map_education(parent_id: &str, record: &EducationRecord, index: usize) -> Education {
    Education {
        id: child_id(parent_id, "edu", index),
        institution: record.institution.clone(),
        degree: record.degree.clone(),
        field: record.field.clone(),
        graduation_date: record.end_date.clone(),
        sort_order: index,
    }
}

fn map_skill(parent_id: &str, record: &SkillRecord, index: usize) -> Skill {
    Skill {
        id: child_id(parent_id, "skill", index),
        name: record.name.clone(),
        level: SkillLevel::parse(&record.level),
        sort_order: index,
    }
}

fn map_document(parent_id: &str, record: &DocumentRecord, index: usize) -> Document {
    Document {
        id: child_id(parent_id, "doc", index),
        filename: record.name.clone(),
        kind: DocumentType::parse(&record.kind),
        path: record.url.clone(),
        upload_date: Utc::now(),
    }
}

/// Map a list-item record. Only summary fields and skills are populated;
/// experience, education, and documents are deliberately empty (the list
/// endpoint does not carry them) and notes have no backing field at all.
pub fn map_candidate_summary(
    record: &CandidateSummaryRecord,
) -> Result<Candidate, StatusParseError> {
    let (first_name, last_name) = split_name(&record.name);
    let now = Utc::now();

    Ok(Candidate {
        id: record.id.clone(),
        first_name,
        last_name,
        email: record.email.clone(),
        phone: record.phone.clone(),
        status: record.status.parse::<CandidateStatus>()?,
        applied_positions: record.applied_positions.clone(),
        experience: Vec::new(),
        education: Vec::new(),
        skills: record
            .skills
            .iter()
            .enumerate()
            .map(|(i, s)| map_skill(&record.id, s, i))
            .collect(),
        documents: Vec::new(),
        notes: String::new(),
        created_at: now,
        updated_at: now,
    })
}

/// Map a detail record with all child lists populated, ordered by wire
/// index.
pub fn map_candidate_detail(record: &CandidateDetailRecord) -> Result<Candidate, StatusParseError> {
    let (first_name, last_name) = split_name(&record.name);
    let now = Utc::now();

    Ok(Candidate {
        id: record.id.clone(),
        first_name,
        last_name,
        email: record.email.clone(),
        phone: record.phone.clone(),
        status: record.status.parse::<CandidateStatus>()?,
        applied_positions: record.applied_positions.clone(),
        experience: record
            .experience
            .iter()
            .enumerate()
            .map(|(i, e)| map_experience(&record.id, e, i))
            .collect(),
        education: record
            .education
            .iter()
            .enumerate()
            .map(|(i, e)| map_education(&record.id, e, i))
            .collect(),
        skills: record
            .skills
            .iter()
            .enumerate()
            .map(|(i, s)| map_skill(&record.id, s, i))
            .collect(),
        documents: record
            .documents
            .iter()
            .enumerate()
            .map(|(i, d)| map_document(&record.id, d, i))
            .collect(),
        notes: String::new(),
        created_at: now,
        updated_at: now,
    })
}

pub fn map_position(record: &PositionRecord) -> Result<Position, StatusParseError> {
    let now = Utc::now();

    Ok(Position {
        id: record.id.clone(),
        title: record.title.clone(),
        department: record.department.clone(),
        status: record.status.parse::<PositionStatus>()?,
        description: record.description.clone(),
        requirements: PositionRequirements {
            experience: format!("{}+ years", record.min_experience_years),
            // The backend has no education requirement field.
            education: String::new(),
            skills: record.required_skills.clone(),
        },
        candidates: record.candidates.clone(),
        created_at: now,
        updated_at: now,
    })
}

/// Map a whole list, dropping records that fail to map. One malformed
/// record must not sink the rest of the page.
pub fn map_candidate_summaries(records: &[CandidateSummaryRecord]) -> Vec<Candidate> {
    records
        .iter()
        .filter_map(|r| match map_candidate_summary(r) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                warn!("Skipping candidate {}: {}", r.id, e);
                None
            }
        })
        .collect()
}

pub fn map_positions(records: &[PositionRecord]) -> Vec<Position> {
    records
        .iter()
        .filter_map(|r| match map_position(r) {
            Ok(position) => Some(position),
            Err(e) => {
                warn!("Skipping position {}: {}", r.id, e);
                None
            }
        })
        .collect()
}
