//! Accomplishment input and scored output types.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccomplishmentId, Score, Timestamp};

/// A single achievement statement tied to one employment role.
///
/// Sourced from an external persistence layer; this core never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accomplishment {
    pub id: AccomplishmentId,
    pub text: String,
    pub job_title: String,
    pub company_name: String,
    pub role_start_date: Option<Timestamp>,
    pub is_current: bool,
}

impl Accomplishment {
    /// Creates an accomplishment for a past, undated role.
    pub fn new(
        text: impl Into<String>,
        job_title: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            id: AccomplishmentId::new(),
            text: text.into(),
            job_title: job_title.into(),
            company_name: company_name.into(),
            role_start_date: None,
            is_current: false,
        }
    }

    /// Sets the role start date.
    pub fn with_start_date(mut self, start: Timestamp) -> Self {
        self.role_start_date = Some(start);
        self
    }

    /// Marks the role as the candidate's current one.
    pub fn current(mut self) -> Self {
        self.is_current = true;
        self
    }
}

/// An accomplishment with its component and final relevance scores.
///
/// Immutable value object produced once per scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAccomplishment {
    pub id: AccomplishmentId,
    pub text: String,
    pub job_title: String,
    pub company_name: String,
    /// Fraction of requirement skills evidenced by the text.
    pub skill_match: Score,
    /// Embedding-space closeness to the job description.
    pub semantic: Score,
    /// How recent the underlying role is.
    pub recency: Score,
    /// Quantified-impact signal strength.
    pub metrics: Score,
    /// Weighted sum of the four components.
    pub final_score: Score,
    /// Requirement skills the text evidenced, for transparency.
    pub matched_skills: Vec<String>,
    /// Human-readable justifications; never empty.
    pub reasons: Vec<String>,
    pub role_start_date: Option<Timestamp>,
    pub is_current: bool,
}
