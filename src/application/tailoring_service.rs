//! TailoringService - the extract, score, select, analyze pipeline.
//!
//! Composes the extractor and engine into the end-to-end flow: score every
//! accomplishment, select a bounded diverse subset, compute skill coverage
//! and gaps over the selection, and assemble the final result with
//! recommendations. The pipeline is stateless: a pure function of its
//! inputs with no persistent state machine inside.

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{JobPostingId, ProfileId, Timestamp};
use crate::domain::matching::{Accomplishment, SelectionPolicy};
use crate::domain::requirements::{ExtractError, JobRequirements};
use crate::domain::tailoring::{
    build_recommendations, compute_coverage, compute_match_score, TailoredResume,
};

use super::{MatchingEngine, RequirementsExtractor};

/// Pipeline failures that indicate the caller provided nothing to work with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TailoringError {
    #[error("no accomplishments provided to tailor")]
    EmptyAccomplishments,
}

/// One tailoring request.
#[derive(Debug, Clone)]
pub struct TailoringRequest {
    pub profile_id: ProfileId,
    pub job_posting_id: Option<JobPostingId>,
    /// Title of the posting being targeted, for logging and display.
    pub job_title: String,
    /// Company behind the posting.
    pub company_name: String,
    /// Cleaned posting text, used for semantic comparison.
    pub job_description: String,
    /// Extracted requirements to tailor against.
    pub requirements: JobRequirements,
    /// Candidate accomplishment pool.
    pub accomplishments: Vec<Accomplishment>,
    /// Overrides the default selection size when set.
    pub max_accomplishments: Option<usize>,
}

/// Orchestrates the full tailoring pipeline.
pub struct TailoringService {
    extractor: RequirementsExtractor,
    engine: MatchingEngine,
    policy: SelectionPolicy,
}

impl TailoringService {
    /// Creates a service with the default selection policy.
    pub fn new(extractor: RequirementsExtractor, engine: MatchingEngine) -> Self {
        Self {
            extractor,
            engine,
            policy: SelectionPolicy::default(),
        }
    }

    /// Replaces the default selection policy.
    pub fn with_selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Extracts requirements from posting text (heuristic plus optional
    /// augmentation with mandatory fallback).
    pub async fn extract_requirements(&self, text: &str) -> Result<JobRequirements, ExtractError> {
        self.extractor.extract(text).await
    }

    /// Runs score, select, coverage, and assembly for one request.
    pub fn generate_tailored_resume(
        &self,
        request: TailoringRequest,
    ) -> Result<TailoredResume, TailoringError> {
        if request.accomplishments.is_empty() {
            return Err(TailoringError::EmptyAccomplishments);
        }

        let scored = self.engine.score_accomplishments(
            &request.requirements,
            &request.accomplishments,
            &request.job_description,
        );

        let mut policy = self.policy.clone();
        if let Some(max) = request.max_accomplishments {
            policy.max_count = max;
        }
        let selected = self.engine.select_top_accomplishments(&scored, &policy);

        let report = compute_coverage(&request.requirements, &selected);
        let recommendations = build_recommendations(&request.requirements, &report);
        let match_score = compute_match_score(&selected, report.coverage);

        info!(
            profile_id = %request.profile_id,
            job_title = %request.job_title,
            company = %request.company_name,
            candidates = request.accomplishments.len(),
            selected = selected.len(),
            coverage = %report.coverage,
            match_score = %match_score,
            "assembled tailored resume"
        );

        Ok(TailoredResume {
            profile_id: request.profile_id,
            job_posting_id: request.job_posting_id,
            selected_accomplishments: selected,
            skill_coverage: report.by_skill,
            coverage: report.coverage,
            gaps: report.gaps,
            recommendations,
            match_score,
            created_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matching::MatchWeights;
    use crate::domain::requirements::ExtractionMethod;

    fn service() -> TailoringService {
        TailoringService::new(
            RequirementsExtractor::new(),
            MatchingEngine::new(MatchWeights::default()),
        )
    }

    fn requirements(skills: &[&str]) -> JobRequirements {
        let mut reqs = JobRequirements::empty(ExtractionMethod::Heuristic);
        for skill in skills {
            reqs.required_skills.insert(*skill);
        }
        reqs
    }

    fn request(skills: &[&str], accomplishments: Vec<Accomplishment>) -> TailoringRequest {
        TailoringRequest {
            profile_id: ProfileId::new(),
            job_posting_id: Some(JobPostingId::new()),
            job_title: "Senior Engineer".to_string(),
            company_name: "Acme".to_string(),
            job_description: "role description".to_string(),
            requirements: requirements(skills),
            accomplishments,
            max_accomplishments: None,
        }
    }

    #[test]
    fn empty_pool_is_rejected() {
        let result = service().generate_tailored_resume(request(&["python"], vec![]));
        assert_eq!(result, Err(TailoringError::EmptyAccomplishments));
    }

    #[test]
    fn full_coverage_yields_no_gaps() {
        let accomplishments = vec![
            Accomplishment::new("Shipped python services", "Engineer", "Acme"),
            Accomplishment::new("Tuned sql queries", "Engineer", "Beta"),
        ];

        let resume = service()
            .generate_tailored_resume(request(&["python", "sql"], accomplishments))
            .unwrap();

        assert_eq!(resume.coverage.value(), 1.0);
        assert!(resume.gaps.is_empty());
        assert_eq!(resume.skill_coverage.len(), 2);
        assert!(resume.recommendations[0].contains("Strong skill coverage"));
    }

    #[test]
    fn partial_coverage_reports_ordered_gaps() {
        let accomplishments = vec![Accomplishment::new("python work", "Engineer", "Acme")];

        let resume = service()
            .generate_tailored_resume(request(&["python", "rust", "kafka"], accomplishments))
            .unwrap();

        assert!((resume.coverage.value() - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(resume.gaps, vec!["rust", "kafka"]);
    }

    #[test]
    fn selection_respects_requested_maximum() {
        let accomplishments: Vec<_> = (0..10)
            .map(|i| Accomplishment::new(format!("python item {}", i), "Engineer", "Acme"))
            .collect();

        let mut req = request(&["python"], accomplishments);
        req.max_accomplishments = Some(3);

        let resume = service().generate_tailored_resume(req).unwrap();
        assert_eq!(resume.selected_accomplishments.len(), 3);
    }

    #[test]
    fn coverage_counts_only_selected_items() {
        // Pool covers rust, but only one python item can be selected.
        let accomplishments = vec![
            Accomplishment::new("python everywhere", "Engineer", "Acme").current(),
            Accomplishment::new("rust on the side", "Engineer", "Beta"),
        ];

        let mut req = request(&["python", "rust"], accomplishments);
        req.max_accomplishments = Some(1);

        let resume = service().generate_tailored_resume(req).unwrap();
        assert_eq!(resume.selected_accomplishments.len(), 1);
        assert!((resume.coverage.value() - 0.5).abs() < 1e-9);
        assert_eq!(resume.gaps.len(), 1);
    }

    #[test]
    fn current_role_matching_item_outranks_unrelated_past_items() {
        let now = Timestamp::now();
        let accomplishments = vec![
            Accomplishment::new("Launched python api with sql backend", "Engineer", "Now Co")
                .with_start_date(now.minus_years(1))
                .current(),
            Accomplishment::new("Improved python test coverage", "Engineer", "Now Co")
                .with_start_date(now.minus_years(1))
                .current(),
            Accomplishment::new("Organized office relocation", "Manager", "Old Co")
                .with_start_date(now.minus_years(6)),
            Accomplishment::new("Ran vendor negotiations", "Manager", "Older Co")
                .with_start_date(now.minus_years(8)),
            Accomplishment::new("Maintained fax machines", "Clerk", "Oldest Co")
                .with_start_date(now.minus_years(10)),
        ];

        let resume = service()
            .generate_tailored_resume(request(&["python", "sql", "kafka"], accomplishments))
            .unwrap();

        let top = &resume.selected_accomplishments[0];
        assert!(top.is_current);
        assert!(top.text.contains("python"));

        let best_unrelated = resume
            .selected_accomplishments
            .iter()
            .filter(|s| !s.is_current)
            .map(|s| s.final_score.value())
            .fold(0.0, f64::max);
        assert!(top.final_score.value() > best_unrelated);
    }

    #[test]
    fn match_score_stays_in_unit_interval() {
        let accomplishments = vec![Accomplishment::new("python", "Engineer", "Acme")];
        let resume = service()
            .generate_tailored_resume(request(&["python"], accomplishments))
            .unwrap();

        assert!((0.0..=1.0).contains(&resume.match_score.value()));
    }

    #[tokio::test]
    async fn extract_requirements_delegates_to_extractor() {
        let reqs = service()
            .extract_requirements("Requirements:\n- 4 years of Rust")
            .await
            .unwrap();
        assert_eq!(reqs.years_experience, Some(4));
        assert!(reqs.required_skills.contains("rust"));
    }
}
