//! Tailored resume aggregate and analytics.
//!
//! Coverage, gap, and recommendation computation over a selected
//! accomplishment set, plus the final [`TailoredResume`] aggregate handed to
//! external callers.

mod recommendations;
mod tailored_resume;

pub use recommendations::{build_recommendations, HIGH_COVERAGE, LOW_COVERAGE};
pub use tailored_resume::{compute_coverage, compute_match_score, CoverageReport, TailoredResume};
