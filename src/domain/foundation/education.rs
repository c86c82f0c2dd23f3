//! Education level ladder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Education requirement ladder, ordered lowest to highest.
///
/// `Ord` follows the ladder so "highest match wins" comparisons can use
/// plain `>` / `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Associate,
    Bachelors,
    Masters,
    Doctorate,
}

/// Detection keywords per rung, checked highest first so the first hit wins.
const LADDER: &[(EducationLevel, &[&str])] = &[
    (
        EducationLevel::Doctorate,
        &["phd", "ph.d", "doctorate", "doctoral"],
    ),
    (
        EducationLevel::Masters,
        &["master's", "masters", "master of", "m.s.", "msc", "mba"],
    ),
    (
        EducationLevel::Bachelors,
        &["bachelor's", "bachelors", "bachelor of", "b.s.", "bsc", "undergraduate degree"],
    ),
    (
        EducationLevel::Associate,
        &["associate's", "associate degree", "associates degree"],
    ),
];

impl EducationLevel {
    /// Scans free text for the highest education rung mentioned.
    pub fn detect(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        for (level, keywords) in LADDER {
            if keywords.iter().any(|k| lowered.contains(k)) {
                return Some(*level);
            }
        }
        None
    }

    /// Lenient parse for short labels coming back from the augmentation
    /// service ("Master's", "bachelors", "PhD", ...).
    pub fn parse_lenient(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }
        Self::detect(trimmed)
    }

    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::Associate => "Associate degree",
            EducationLevel::Bachelors => "Bachelor's degree",
            EducationLevel::Masters => "Master's degree",
            EducationLevel::Doctorate => "Doctorate",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
