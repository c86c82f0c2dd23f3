//! MatchingEngine - multi-factor accomplishment scoring.
//!
//! Combines four component scores per accomplishment: skill evidence,
//! semantic closeness to the job description, role recency, and quantified
//! impact. Each accomplishment is scored independently; there is no
//! cross-accomplishment normalization.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::domain::foundation::{Score, Timestamp};
use crate::domain::matching::{
    match_skills, metrics_score, recency_score, select_top, Accomplishment, ConfigurationError,
    MatchWeights, ScoredAccomplishment, SelectionPolicy, SkillFamilies,
};
use crate::domain::requirements::JobRequirements;
use crate::ports::EmbeddingProvider;

/// Skill component at or above this is called out as a strong match.
const STRONG_SKILL: f64 = 0.5;
/// Semantic component at or above this is called out.
const STRONG_SEMANTIC: f64 = 0.7;
/// Recency component at or above this (for past roles) is called out.
const RECENT_ROLE: f64 = 0.6;
/// Metrics component at or above this is called out.
const QUANTIFIED: f64 = 0.4;

/// Maximum skills named in a skill-match reason.
const MAX_NAMED_SKILLS: usize = 3;

/// Multi-factor scoring engine.
///
/// Holds no request-scoped mutable state; one engine may serve many scoring
/// calls. The job-description vector cache is read-mostly, with a lock
/// guarding inserts.
pub struct MatchingEngine {
    weights: MatchWeights,
    families: SkillFamilies,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
    job_vectors: RwLock<HashMap<String, Arc<Vec<f32>>>>,
}

impl MatchingEngine {
    /// Creates an engine with the given weight map and the built-in skill
    /// family table. No embedding backend: the semantic component degrades
    /// to 0.0 until one is injected.
    pub fn new(weights: MatchWeights) -> Self {
        Self {
            weights,
            families: SkillFamilies::builtin(),
            embedder: None,
            job_vectors: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an engine from raw weights, validating the unit-sum invariant.
    pub fn with_weights(
        skill_match: f64,
        semantic: f64,
        recency: f64,
        metrics: f64,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(MatchWeights::try_new(
            skill_match,
            semantic,
            recency,
            metrics,
        )?))
    }

    /// Injects an embedding backend for the semantic component.
    pub fn with_embedder(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Replaces the skill family expansion table.
    pub fn with_skill_families(mut self, families: SkillFamilies) -> Self {
        self.families = families;
        self
    }

    /// Returns the configured weight map.
    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Scores every accomplishment against the requirements.
    pub fn score_accomplishments(
        &self,
        requirements: &JobRequirements,
        accomplishments: &[Accomplishment],
        job_description: &str,
    ) -> Vec<ScoredAccomplishment> {
        let now = Timestamp::now();
        let skills = requirements.all_skills();

        accomplishments
            .iter()
            .map(|accomplishment| {
                let skill = match_skills(&accomplishment.text, &skills, &self.families);
                let semantic = self.semantic_score(&accomplishment.text, job_description);
                let recency = recency_score(
                    accomplishment.role_start_date.as_ref(),
                    accomplishment.is_current,
                    &now,
                );
                let metrics = metrics_score(&accomplishment.text);
                let final_score = self.weights.combine(skill.score, semantic, recency, metrics);

                let reasons = build_reasons(
                    skill.score,
                    &skill.matched,
                    semantic,
                    recency,
                    metrics,
                    accomplishment.is_current,
                );

                ScoredAccomplishment {
                    id: accomplishment.id,
                    text: accomplishment.text.clone(),
                    job_title: accomplishment.job_title.clone(),
                    company_name: accomplishment.company_name.clone(),
                    skill_match: skill.score,
                    semantic,
                    recency,
                    metrics,
                    final_score,
                    matched_skills: skill.matched,
                    reasons,
                    role_start_date: accomplishment.role_start_date,
                    is_current: accomplishment.is_current,
                }
            })
            .collect()
    }

    /// Selects the top accomplishments under the given policy.
    pub fn select_top_accomplishments(
        &self,
        scored: &[ScoredAccomplishment],
        policy: &SelectionPolicy,
    ) -> Vec<ScoredAccomplishment> {
        select_top(scored, policy)
    }

    /// Cosine similarity between the accomplishment and the job description.
    ///
    /// Soft on every failure path: no backend, embedding errors, and zero
    /// vectors all yield 0.0.
    fn semantic_score(&self, text: &str, job_description: &str) -> Score {
        let Some(embedder) = &self.embedder else {
            return Score::ZERO;
        };
        let Some(job_vector) = self.job_vector(job_description, embedder.as_ref()) else {
            return Score::ZERO;
        };

        match embedder.embed(text) {
            Ok(vector) => Score::new(cosine(&vector, &job_vector).max(0.0)),
            Err(err) => {
                debug!(error = %err, "embedding failed, semantic component degrades to zero");
                Score::ZERO
            }
        }
    }

    /// Returns the cached job-description vector, embedding on first use.
    fn job_vector(
        &self,
        job_description: &str,
        embedder: &dyn EmbeddingProvider,
    ) -> Option<Arc<Vec<f32>>> {
        if let Some(vector) = self
            .job_vectors
            .read()
            .expect("job vector cache poisoned")
            .get(job_description)
        {
            return Some(Arc::clone(vector));
        }

        match embedder.embed(job_description) {
            Ok(vector) => {
                let vector = Arc::new(vector);
                self.job_vectors
                    .write()
                    .expect("job vector cache poisoned")
                    .insert(job_description.to_string(), Arc::clone(&vector));
                Some(vector)
            }
            Err(err) => {
                debug!(error = %err, "job description embedding failed");
                None
            }
        }
    }
}

/// Builds qualitative justifications from component thresholds.
///
/// Always returns at least one entry.
fn build_reasons(
    skill: Score,
    matched: &[String],
    semantic: Score,
    recency: Score,
    metrics: Score,
    is_current: bool,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if skill.at_least(STRONG_SKILL) && !matched.is_empty() {
        reasons.push(format!(
            "Directly demonstrates {}",
            named_skills(matched),
        ));
    } else if !matched.is_empty() {
        reasons.push(format!("Mentions {}", named_skills(matched)));
    }

    if semantic.at_least(STRONG_SEMANTIC) {
        reasons.push("Closely mirrors the language of the job description".to_string());
    }

    if is_current {
        reasons.push("From your current role".to_string());
    } else if recency.at_least(RECENT_ROLE) {
        reasons.push("Recent experience".to_string());
    }

    if metrics.at_least(QUANTIFIED) {
        reasons.push("Shows quantified impact".to_string());
    }

    if reasons.is_empty() {
        reasons.push("General experience relevant to this application".to_string());
    }

    reasons
}

fn named_skills(matched: &[String]) -> String {
    let shown: Vec<&str> = matched
        .iter()
        .take(MAX_NAMED_SKILLS)
        .map(String::as_str)
        .collect();
    let mut joined = shown.join(", ");
    if matched.len() > MAX_NAMED_SKILLS {
        joined.push_str(&format!(" (+{} more)", matched.len() - MAX_NAMED_SKILLS));
    }
    joined
}

/// Cosine similarity of two vectors; 0.0 on dimension mismatch or zero norm.
fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
