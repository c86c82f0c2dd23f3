//! Component weight map for the scoring engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Score;

/// Tolerance when checking that weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Engine construction errors: a caller contract violation, surfaced
/// immediately rather than absorbed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("match weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },

    #[error("match weight '{name}' must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
}

/// Weights for the four scoring components.
///
/// Invariant: all weights are finite, non-negative, and sum to 1.0 within
/// [`WEIGHT_SUM_TOLERANCE`], so any weighted combination of unit-interval
/// component scores is itself in the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights", into = "RawWeights")]
pub struct MatchWeights {
    skill_match: f64,
    semantic: f64,
    recency: f64,
    metrics: f64,
}

/// Serde shadow allowing validation on deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawWeights {
    skill_match: f64,
    semantic: f64,
    recency: f64,
    metrics: f64,
}

impl MatchWeights {
    /// Creates a weight map, validating the unit-sum invariant.
    pub fn try_new(
        skill_match: f64,
        semantic: f64,
        recency: f64,
        metrics: f64,
    ) -> Result<Self, ConfigurationError> {
        for (name, value) in [
            ("skill_match", skill_match),
            ("semantic", semantic),
            ("recency", recency),
            ("metrics", metrics),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidWeight { name, value });
            }
        }

        let sum = skill_match + semantic + recency + metrics;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigurationError::WeightSum { sum });
        }

        Ok(Self {
            skill_match,
            semantic,
            recency,
            metrics,
        })
    }

    /// Combines component scores into the final weighted score.
    pub fn combine(&self, skill_match: Score, semantic: Score, recency: Score, metrics: Score) -> Score {
        Score::new(
            self.skill_match * skill_match.value()
                + self.semantic * semantic.value()
                + self.recency * recency.value()
                + self.metrics * metrics.value(),
        )
    }

    pub fn skill_match(&self) -> f64 {
        self.skill_match
    }

    pub fn semantic(&self) -> f64 {
        self.semantic
    }

    pub fn recency(&self) -> f64 {
        self.recency
    }

    pub fn metrics(&self) -> f64 {
        self.metrics
    }
}

impl Default for MatchWeights {
    /// Default emphasis: skill evidence first, then semantic closeness,
    /// recency, and quantified impact.
    fn default() -> Self {
        Self {
            skill_match: 0.40,
            semantic: 0.25,
            recency: 0.20,
            metrics: 0.15,
        }
    }
}

impl TryFrom<RawWeights> for MatchWeights {
    type Error = ConfigurationError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::try_new(raw.skill_match, raw.semantic, raw.recency, raw.metrics)
    }
}

impl From<MatchWeights> for RawWeights {
    fn from(weights: MatchWeights) -> Self {
        Self {
            skill_match: weights.skill_match,
            semantic: weights.semantic,
            recency: weights.recency,
            metrics: weights.metrics,
        }
    }
}
