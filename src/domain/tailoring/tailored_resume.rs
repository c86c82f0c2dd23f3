//! Tailored resume aggregate and coverage analytics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{JobPostingId, ProfileId, Score, Timestamp};
use crate::domain::matching::ScoredAccomplishment;
use crate::domain::requirements::JobRequirements;

/// Weight of average accomplishment quality in the overall match score.
const QUALITY_WEIGHT: f64 = 0.7;
/// Weight of skill coverage in the overall match score.
const COVERAGE_WEIGHT: f64 = 0.3;

/// The assembled tailoring result.
///
/// Built once per orchestration call and handed to external callers (UI,
/// persistence, rendering); never mutated afterward and never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredResume {
    pub profile_id: ProfileId,
    pub job_posting_id: Option<JobPostingId>,
    /// Selected accomplishments in score order, bounded by the policy.
    pub selected_accomplishments: Vec<ScoredAccomplishment>,
    /// Per-skill coverage over the selected set.
    pub skill_coverage: BTreeMap<String, bool>,
    /// Fraction of requirement skills covered; 1.0 when there are none.
    pub coverage: Score,
    /// Requirement skills with no evidence among the selected items.
    pub gaps: Vec<String>,
    /// Ordered guidance for the candidate.
    pub recommendations: Vec<String>,
    /// Blend of selection quality and coverage.
    pub match_score: Score,
    pub created_at: Timestamp,
}

/// Coverage analytics over a selected accomplishment set.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Covered flag per requirement skill.
    pub by_skill: BTreeMap<String, bool>,
    /// Covered fraction; 1.0 when there are no requirement skills.
    pub coverage: Score,
    /// Uncovered skills in requirement order.
    pub gaps: Vec<String>,
}

/// Computes skill coverage over the *selected* accomplishments.
///
/// A skill counts as covered only when it appears in the matched-skills
/// list of at least one selected item; evidence in unselected candidates
/// does not count.
pub fn compute_coverage(
    requirements: &JobRequirements,
    selected: &[ScoredAccomplishment],
) -> CoverageReport {
    let all_skills = requirements.all_skills();
    if all_skills.is_empty() {
        return CoverageReport {
            by_skill: BTreeMap::new(),
            coverage: Score::MAX,
            gaps: Vec::new(),
        };
    }

    let evidenced: Vec<String> = selected
        .iter()
        .flat_map(|s| s.matched_skills.iter())
        .map(|s| s.to_lowercase())
        .collect();

    let mut by_skill = BTreeMap::new();
    let mut gaps = Vec::new();
    let mut covered_count = 0usize;

    for skill in all_skills.iter() {
        let covered = evidenced.iter().any(|e| e == &skill.to_lowercase());
        by_skill.insert(skill.to_string(), covered);
        if covered {
            covered_count += 1;
        } else {
            gaps.push(skill.to_string());
        }
    }

    CoverageReport {
        by_skill,
        coverage: Score::new(covered_count as f64 / all_skills.len() as f64),
        gaps,
    }
}

/// Blends average selection quality with coverage into one match score.
pub fn compute_match_score(selected: &[ScoredAccomplishment], coverage: Score) -> Score {
    let average = if selected.is_empty() {
        0.0
    } else {
        selected
            .iter()
            .map(|s| s.final_score.value())
            .sum::<f64>()
            / selected.len() as f64
    };

    Score::new(QUALITY_WEIGHT * average + COVERAGE_WEIGHT * coverage.value())
}
