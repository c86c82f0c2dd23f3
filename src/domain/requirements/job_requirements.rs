//! Structured job posting requirements.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{EducationLevel, Score, SkillSet};

use super::SectionKind;

/// How a [`JobRequirements`] value was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Local heuristic pass only.
    Heuristic,
    /// External language-understanding service only.
    Augmented,
    /// Heuristic pass merged with an augmented result.
    Hybrid,
}

/// Structured requirements extracted from one job posting.
///
/// Created fresh per extraction call and immutable afterward; this core
/// does not persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    /// Skills the posting demands.
    pub required_skills: SkillSet,
    /// Skills the posting marks as nice-to-have.
    pub preferred_skills: SkillSet,
    /// Required years of experience, when stated plausibly.
    pub years_experience: Option<u8>,
    /// Highest education rung the posting mentions.
    pub education_level: Option<EducationLevel>,
    /// Responsibility statements in posting order.
    pub key_responsibilities: Vec<String>,
    /// How confident the extraction is in its own output.
    pub confidence: Score,
    /// Which path produced this value.
    pub extraction_method: ExtractionMethod,
    /// Identified section blocks, verbatim.
    pub raw_sections: BTreeMap<SectionKind, String>,
}

impl JobRequirements {
    /// Creates an empty requirements value for the given method.
    pub fn empty(extraction_method: ExtractionMethod) -> Self {
        Self {
            required_skills: SkillSet::new(),
            preferred_skills: SkillSet::new(),
            years_experience: None,
            education_level: None,
            key_responsibilities: Vec::new(),
            confidence: Score::ZERO,
            extraction_method,
            raw_sections: BTreeMap::new(),
        }
    }

    /// Union of required and preferred skills, required entries first.
    pub fn all_skills(&self) -> SkillSet {
        self.required_skills.union(&self.preferred_skills)
    }

    /// Returns true when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.required_skills.is_empty()
            && self.preferred_skills.is_empty()
            && self.years_experience.is_none()
            && self.education_level.is_none()
            && self.key_responsibilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_requirements_report_empty() {
        let reqs = JobRequirements::empty(ExtractionMethod::Heuristic);
        assert!(reqs.is_empty());
        assert_eq!(reqs.confidence, Score::ZERO);
    }

    #[test]
    fn all_skills_unions_both_buckets() {
        let mut reqs = JobRequirements::empty(ExtractionMethod::Heuristic);
        reqs.required_skills.insert("python");
        reqs.preferred_skills.insert("rust");
        reqs.preferred_skills.insert("Python");

        let all = reqs.all_skills();
        assert_eq!(all.len(), 2);
        assert_eq!(all.iter().next(), Some("python"));
    }

    #[test]
    fn serializes_extraction_method_snake_case() {
        let json = serde_json::to_string(&ExtractionMethod::Hybrid).unwrap();
        assert_eq!(json, "\"hybrid\"");
    }

    #[test]
    fn roundtrips_through_json() {
        let mut reqs = JobRequirements::empty(ExtractionMethod::Hybrid);
        reqs.required_skills.insert("sql");
        reqs.years_experience = Some(5);
        reqs.raw_sections
            .insert(SectionKind::Requirements, "- sql".to_string());

        let json = serde_json::to_string(&reqs).unwrap();
        let back: JobRequirements = serde_json::from_str(&json).unwrap();
        assert_eq!(reqs, back);
    }
}
