//! Recommendation rule ladder.

use crate::domain::requirements::JobRequirements;

use super::CoverageReport;

/// Coverage at or above this emits an affirming message.
pub const HIGH_COVERAGE: f64 = 0.8;
/// Coverage below this emits a warning naming the missing skills.
pub const LOW_COVERAGE: f64 = 0.5;

/// Maximum number of gap skills named in a single message.
const MAX_NAMED_GAPS: usize = 5;

/// Builds ordered recommendations from coverage analytics and the
/// requirements themselves.
///
/// Fixed ladder: a coverage verdict first, then informational notes about
/// stated education and experience expectations regardless of coverage.
pub fn build_recommendations(
    requirements: &JobRequirements,
    report: &CoverageReport,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    let coverage = report.coverage.value();

    if report.by_skill.is_empty() {
        recommendations.push(
            "No specific skills were extracted from this posting; review the selection manually."
                .to_string(),
        );
    } else if coverage >= HIGH_COVERAGE {
        recommendations.push(format!(
            "Strong skill coverage: your selected accomplishments evidence {} of {} requested skills.",
            report.by_skill.values().filter(|&&covered| covered).count(),
            report.by_skill.len(),
        ));
    } else if coverage < LOW_COVERAGE {
        recommendations.push(format!(
            "Low skill coverage: no selected accomplishment mentions {}. Consider adding or rewording bullets that show this experience.",
            named_gaps(&report.gaps),
        ));
    } else if !report.gaps.is_empty() {
        recommendations.push(format!(
            "Decent coverage with room to improve: {} still lack evidence.",
            named_gaps(&report.gaps),
        ));
    }

    if let Some(level) = requirements.education_level {
        recommendations.push(format!(
            "The posting mentions a {}; make sure your education section states yours clearly.",
            level,
        ));
    }

    if let Some(years) = requirements.years_experience {
        recommendations.push(format!(
            "The posting asks for {} years of experience; lead with roles that add up to it.",
            years,
        ));
    }

    recommendations
}

fn named_gaps(gaps: &[String]) -> String {
    let shown: Vec<&str> = gaps.iter().take(MAX_NAMED_GAPS).map(String::as_str).collect();
    let mut joined = shown.join(", ");
    if gaps.len() > MAX_NAMED_GAPS {
        joined.push_str(&format!(" (and {} more)", gaps.len() - MAX_NAMED_GAPS));
    }
    joined
}
