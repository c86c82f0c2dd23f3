//! Matching engine configuration

use serde::Deserialize;

use crate::domain::matching::{MatchWeights, SelectionPolicy};

use super::error::ValidationError;

/// Scoring and selection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Weight of the skill-match component
    #[serde(default = "default_skill_match_weight")]
    pub skill_match_weight: f64,

    /// Weight of the semantic-similarity component
    #[serde(default = "default_semantic_weight")]
    pub semantic_weight: f64,

    /// Weight of the recency component
    #[serde(default = "default_recency_weight")]
    pub recency_weight: f64,

    /// Weight of the quantified-impact component
    #[serde(default = "default_metrics_weight")]
    pub metrics_weight: f64,

    /// Default number of accomplishments selected
    #[serde(default = "default_max_accomplishments")]
    pub max_accomplishments: usize,

    /// Minimum final score kept in a selection
    #[serde(default)]
    pub min_score: f64,

    /// Fraction of slots soft-reserved for current-role items
    #[serde(default = "default_current_role_preference")]
    pub current_role_preference: f64,

    /// Hard cap on items per employer
    pub max_per_company: Option<usize>,
}

impl MatchingConfig {
    /// Builds the validated weight map
    pub fn weights(&self) -> Result<MatchWeights, ValidationError> {
        MatchWeights::try_new(
            self.skill_match_weight,
            self.semantic_weight,
            self.recency_weight,
            self.metrics_weight,
        )
        .map_err(|_| ValidationError::InvalidWeights)
    }

    /// Builds the selection policy
    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            max_count: self.max_accomplishments,
            min_score: self.min_score,
            current_role_preference: self.current_role_preference,
            max_per_company: self.max_per_company,
        }
    }

    /// Validate matching configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights()?;

        if self.max_accomplishments == 0 {
            return Err(ValidationError::InvalidSelectionLimit);
        }

        if !(0.0..=1.0).contains(&self.current_role_preference) {
            return Err(ValidationError::InvalidRolePreference);
        }

        Ok(())
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            skill_match_weight: default_skill_match_weight(),
            semantic_weight: default_semantic_weight(),
            recency_weight: default_recency_weight(),
            metrics_weight: default_metrics_weight(),
            max_accomplishments: default_max_accomplishments(),
            min_score: 0.0,
            current_role_preference: default_current_role_preference(),
            max_per_company: None,
        }
    }
}

fn default_skill_match_weight() -> f64 {
    0.40
}

fn default_semantic_weight() -> f64 {
    0.25
}

fn default_recency_weight() -> f64 {
    0.20
}

fn default_metrics_weight() -> f64 {
    0.15
}

fn default_max_accomplishments() -> usize {
    8
}

fn default_current_role_preference() -> f64 {
    0.5
}
