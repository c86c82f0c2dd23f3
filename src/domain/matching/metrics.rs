//! Quantified-impact scoring.
//!
//! Detects whether an accomplishment statement carries measurable evidence:
//! numbers (percentages, currency, from-X-to-Y movements), a strong action
//! verb, and an impact-indicating keyword. Each signal contributes a fixed
//! fraction; text with no signal at all scores 0.0.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::{contains_term, Score};

/// Contribution of quantification (percent, currency, numeric movement).
const QUANTIFICATION_SIGNAL: f64 = 0.4;
/// Contribution of a strong action verb.
const ACTION_VERB_SIGNAL: f64 = 0.3;
/// Contribution of an impact keyword.
const IMPACT_SIGNAL: f64 = 0.3;

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?\s*%").expect("valid percent pattern"));

static CURRENCY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[$\u{20AC}\u{A3}]\s*\d[\d,]*(?:\.\d+)?\s*(?:[kKmMbB]\b|million|billion)?")
        .expect("valid currency pattern")
});

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bfrom\s+[$\u{20AC}\u{A3}]?\d[\d,.]*\S*\s+(?:down\s+)?to\s+[$\u{20AC}\u{A3}]?\d[\d,.]*")
        .expect("valid range pattern")
});

static MULTIPLIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d+(?:\.\d+)?x\b").expect("valid multiplier pattern"));

/// Verbs that read as ownership of an outcome.
const ACTION_VERBS: &[&str] = &[
    "led", "launched", "built", "delivered", "shipped", "designed", "implemented", "migrated",
    "automated", "scaled", "optimized", "reduced", "increased", "improved", "drove", "grew",
    "cut", "saved", "accelerated", "streamlined", "spearheaded", "architected", "modernized",
];

/// Nouns that indicate the outcome mattered.
const IMPACT_KEYWORDS: &[&str] = &[
    "revenue", "cost", "costs", "savings", "efficiency", "performance", "latency", "uptime",
    "retention", "conversion", "churn", "growth", "throughput", "adoption", "productivity",
    "reliability", "engagement", "incidents",
];

/// Returns true when the text contains any numeric quantification.
fn has_quantification(text: &str) -> bool {
    PERCENT_RE.is_match(text)
        || CURRENCY_RE.is_match(text)
        || RANGE_RE.is_match(text)
        || MULTIPLIER_RE.is_match(text)
}

/// Scores the quantified-impact strength of an accomplishment statement.
pub fn metrics_score(text: &str) -> Score {
    let lowered = text.to_lowercase();

    let mut score = 0.0;
    if has_quantification(text) {
        score += QUANTIFICATION_SIGNAL;
    }
    if ACTION_VERBS.iter().any(|v| contains_term(&lowered, v)) {
        score += ACTION_VERB_SIGNAL;
    }
    if IMPACT_KEYWORDS.iter().any(|k| contains_term(&lowered, k)) {
        score += IMPACT_SIGNAL;
    }

    Score::new(score)
}
