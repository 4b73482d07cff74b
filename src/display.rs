// src/display.rs
//! Presentation helpers for experience dates.

use chrono::{NaiveDate, Utc};

use crate::types::model::Candidate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `"2021-03-15"` renders as `"Mar 2021"`; an open-ended range renders as
/// `"Present"`. Unparseable input is shown as-is rather than hidden.
pub fn format_month_year(date: Option<&str>) -> String {
    let Some(date) = date else {
        return "Present".to_string();
    };
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => parsed.format("%b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Span from the earliest job's start to the latest job's end (or today
/// for a current job), rounded to one decimal. Jobs with unparseable start
/// dates are ignored.
pub fn years_of_experience(candidate: &Candidate) -> f64 {
    let mut jobs: Vec<(NaiveDate, Option<NaiveDate>)> = candidate
        .experience
        .iter()
        .filter_map(|e| {
            let start = NaiveDate::parse_from_str(&e.start_date, DATE_FORMAT).ok()?;
            let end = e
                .end_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok());
            Some((start, end))
        })
        .collect();

    if jobs.is_empty() {
        return 0.0;
    }

    jobs.sort_by_key(|(start, _)| *start);
    let first_start = jobs[0].0;
    let last_end = jobs
        .last()
        .and_then(|(_, end)| *end)
        .unwrap_or_else(|| Utc::now().date_naive());

    let days = (last_end - first_start).num_days().max(0) as f64;
    (days / 365.0 * 10.0).round() / 10.0
}
