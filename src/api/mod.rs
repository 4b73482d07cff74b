// src/api/mod.rs
pub mod candidates;
pub mod positions;

pub use candidates::{CandidateQuery, CandidateService};
pub use positions::{PositionQuery, PositionService, PositionUpdate};
