//! Augmented extraction payload and merge policy.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EducationLevel, SkillSet};

use super::{ExtractionMethod, JobRequirements, MAX_PLAUSIBLE_YEARS};

/// Confidence bonus applied when the heuristic and augmented passes
/// independently agree on years of experience.
pub const AGREEMENT_BONUS: f64 = 0.15;

/// Structured response expected from the language-understanding service.
///
/// All fields default so a partial payload still parses; missing data simply
/// contributes nothing to the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AugmentedRequirements {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub years_experience: Option<u8>,
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub key_responsibilities: Vec<String>,
}

impl AugmentedRequirements {
    /// Returns true when the service extracted nothing usable.
    pub fn is_empty(&self) -> bool {
        self.required_skills.is_empty()
            && self.preferred_skills.is_empty()
            && self.years_experience.is_none()
            && self.education_level.is_none()
            && self.key_responsibilities.is_empty()
    }
}

/// Merges a heuristic extraction with an augmented result.
///
/// Policy:
/// - skill lists union with case-insensitive de-duplication; a skill listed
///   as required never also appears as preferred
/// - years and education prefer the augmented value when present (the
///   years sanity bound applies to the augmented value too)
/// - responsibilities prefer the augmented list when non-empty
/// - raw sections always come from the heuristic pass
/// - confidence gains [`AGREEMENT_BONUS`] when both passes agree on years
pub fn merge(heuristic: JobRequirements, augmented: &AugmentedRequirements) -> JobRequirements {
    let mut required = heuristic.required_skills.clone();
    for skill in &augmented.required_skills {
        required.insert(skill.as_str());
    }

    let preferred_union = heuristic
        .preferred_skills
        .union(&SkillSet::from_iter(augmented.preferred_skills.iter().cloned()));
    let preferred = SkillSet::from_iter(
        preferred_union
            .iter()
            .filter(|&skill| !required.contains(skill)),
    );

    let augmented_years = augmented
        .years_experience
        .filter(|y| *y > 0 && *y <= MAX_PLAUSIBLE_YEARS);
    let years_agree =
        heuristic.years_experience.is_some() && heuristic.years_experience == augmented_years;
    let years_experience = augmented_years.or(heuristic.years_experience);

    let education_level = augmented
        .education_level
        .as_deref()
        .and_then(EducationLevel::parse_lenient)
        .or(heuristic.education_level);

    let key_responsibilities = if augmented.key_responsibilities.is_empty() {
        heuristic.key_responsibilities
    } else {
        augmented.key_responsibilities.clone()
    };

    let confidence = if years_agree {
        heuristic.confidence.boosted(AGREEMENT_BONUS)
    } else {
        heuristic.confidence
    };

    JobRequirements {
        required_skills: required,
        preferred_skills: preferred,
        years_experience,
        education_level,
        key_responsibilities,
        confidence,
        extraction_method: ExtractionMethod::Hybrid,
        raw_sections: heuristic.raw_sections,
    }
}
