//! Role recency scoring.

use crate::domain::foundation::{Score, Timestamp};

/// Score for accomplishments whose role has no start date.
///
/// Undated entries get a low default instead of zero so they are not
/// unfairly buried.
pub const UNDATED_RECENCY: f64 = 0.3;

/// Decay curve coefficients.
///
/// The curve `1 / (1 + RATE * years^SHAPE)` passes through 0.8 at one year
/// and roughly 0.15 at ten years. These are acceptance anchors, not a
/// derived formula.
const DECAY_RATE: f64 = 0.25;
const DECAY_SHAPE: f64 = 1.4;

/// Scores how recent a role is.
///
/// A current role scores exactly 1.0 regardless of start date. Past roles
/// decay with age since the role started.
pub fn recency_score(start: Option<&Timestamp>, is_current: bool, now: &Timestamp) -> Score {
    if is_current {
        return Score::MAX;
    }
    let Some(start) = start else {
        return Score::new(UNDATED_RECENCY);
    };

    let years = now.years_since(start).max(0.0);
    Score::new(1.0 / (1.0 + DECAY_RATE * years.powf(DECAY_SHAPE)))
}
