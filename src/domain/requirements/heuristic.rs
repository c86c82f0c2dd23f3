//! Heuristic requirements extraction.
//!
//! The local pass needs no external service: it segments the posting,
//! pattern-matches years of experience, walks the education ladder, matches
//! the skill vocabulary per section, and collects responsibility bullets.
//! Confidence is the sum of fixed-weight contributions per signal found.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::foundation::{contains_term, EducationLevel, Score, SkillSet};

use super::{ExtractionMethod, JobRequirements, SectionKind, SegmentedPosting, SkillVocabulary};

/// Upper sanity bound for extracted years of experience.
///
/// Larger values are treated as extraction noise ("100 years of combined
/// experience") and discarded.
pub const MAX_PLAUSIBLE_YEARS: u8 = 50;

/// Confidence contribution when years of experience were found.
const YEARS_SIGNAL: f64 = 0.25;
/// Confidence contribution when an education level was found.
const EDUCATION_SIGNAL: f64 = 0.15;
/// Confidence contribution per matched skill.
const PER_SKILL_SIGNAL: f64 = 0.05;
/// Cap on the total skill contribution.
const SKILLS_SIGNAL_CAP: f64 = 0.40;
/// Confidence contribution when responsibilities were found.
const RESPONSIBILITIES_SIGNAL: f64 = 0.20;

/// Maximum number of responsibility statements kept.
const MAX_RESPONSIBILITIES: usize = 12;

static MIN_YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:minimum|min\.?|at least)\s+(?:of\s+)?(\d{1,3})\s*\+?\s*(?:years?|yrs?)\b")
        .expect("valid minimum-years pattern")
});

static YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,3})\s*\+?\s*(?:years?|yrs?)\b").expect("valid years pattern")
});

/// Errors surfaced by the heuristic pass.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("job posting text is empty")]
    EmptyInput,
}

/// Local, service-free requirements extractor.
#[derive(Debug, Clone)]
pub struct HeuristicExtractor {
    vocabulary: SkillVocabulary,
}

impl HeuristicExtractor {
    /// Creates an extractor over the given skill vocabulary.
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Extracts structured requirements from raw posting text.
    pub fn extract(&self, text: &str) -> Result<JobRequirements, ExtractError> {
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let segmented = SegmentedPosting::segment(text);
        let years_experience = extract_years(text);
        let education_level = EducationLevel::detect(text);
        let (required_skills, preferred_skills) = self.extract_skills(&segmented);
        let key_responsibilities = extract_responsibilities(&segmented);

        let confidence = confidence_score(
            years_experience.is_some(),
            education_level.is_some(),
            required_skills.len() + preferred_skills.len(),
            !key_responsibilities.is_empty(),
        );

        Ok(JobRequirements {
            required_skills,
            preferred_skills,
            years_experience,
            education_level,
            key_responsibilities,
            confidence,
            extraction_method: ExtractionMethod::Heuristic,
            raw_sections: segmented.sections,
        })
    }

    /// Matches the vocabulary against section text, bucketing by section.
    ///
    /// Matches in preferred-style blocks land in the preferred bucket;
    /// everything else counts as required. A skill seen in both buckets is
    /// required.
    fn extract_skills(&self, segmented: &SegmentedPosting) -> (SkillSet, SkillSet) {
        let required_text = segmented.required_text().to_lowercase();
        let preferred_text = segmented
            .preferred_text()
            .map(str::to_lowercase)
            .unwrap_or_default();

        let mut required = SkillSet::new();
        let mut preferred = SkillSet::new();

        for skill in self.vocabulary.iter() {
            let lowered = skill.to_lowercase();
            if contains_term(&required_text, &lowered) {
                required.insert(skill);
            } else if contains_term(&preferred_text, &lowered) {
                preferred.insert(skill);
            }
        }

        (required, preferred)
    }
}

/// Extracts the stated years of experience, if plausible.
///
/// "Minimum N years" phrasing wins over the first bare "N years" mention.
/// Values above [`MAX_PLAUSIBLE_YEARS`] are discarded.
pub fn extract_years(text: &str) -> Option<u8> {
    let captured = MIN_YEARS_RE
        .captures(text)
        .or_else(|| YEARS_RE.captures(text))?;
    let years: u16 = captured.get(1)?.as_str().parse().ok()?;
    if years == 0 || years > MAX_PLAUSIBLE_YEARS as u16 {
        return None;
    }
    Some(years as u8)
}

/// Collects responsibility statements from the responsibilities block.
fn extract_responsibilities(segmented: &SegmentedPosting) -> Vec<String> {
    let Some(block) = segmented.section(SectionKind::Responsibilities) else {
        return Vec::new();
    };

    block
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['-', '*', '\u{2022}', '\u{2013}'])
                .trim()
        })
        .filter(|line| line.len() > 8)
        .take(MAX_RESPONSIBILITIES)
        .map(str::to_string)
        .collect()
}

/// Sums fixed-weight confidence contributions, capped at 1.0.
fn confidence_score(
    has_years: bool,
    has_education: bool,
    skill_count: usize,
    has_responsibilities: bool,
) -> Score {
    let mut confidence = 0.0;
    if has_years {
        confidence += YEARS_SIGNAL;
    }
    if has_education {
        confidence += EDUCATION_SIGNAL;
    }
    confidence += (skill_count as f64 * PER_SKILL_SIGNAL).min(SKILLS_SIGNAL_CAP);
    if has_responsibilities {
        confidence += RESPONSIBILITIES_SIGNAL;
    }
    Score::new(confidence)
}
