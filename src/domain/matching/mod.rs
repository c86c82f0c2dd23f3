//! Accomplishment scoring and selection.
//!
//! Pure domain services behind the matching engine: per-component scorers
//! (skill match, recency, quantified impact), the weight map, and the
//! constrained top-N selection policy.

mod accomplishment;
mod families;
mod metrics;
mod recency;
mod selection;
mod skill_match;
mod weights;

pub use accomplishment::{Accomplishment, ScoredAccomplishment};
pub use families::SkillFamilies;
pub use metrics::metrics_score;
pub use recency::{recency_score, UNDATED_RECENCY};
pub use selection::{select_top, SelectionPolicy};
pub use skill_match::{match_skills, SkillMatch};
pub use weights::{ConfigurationError, MatchWeights, WEIGHT_SUM_TOLERANCE};
