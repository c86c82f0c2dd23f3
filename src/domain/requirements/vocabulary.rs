//! Skill vocabulary data.
//!
//! The heuristic pass matches posting text against a known vocabulary of
//! skill names. The vocabulary is data, not code: the built-in list ships as
//! a YAML file and callers can swap in their own.

use once_cell::sync::Lazy;

use crate::domain::foundation::ValidationError;

/// Built-in vocabulary, embedded at compile time.
static BUILTIN: Lazy<SkillVocabulary> = Lazy::new(|| {
    SkillVocabulary::from_yaml_str(include_str!("../../../data/skill_vocabulary.yaml"))
        .expect("built-in skill vocabulary is valid YAML")
});

/// A list of known skill names scanned for in posting text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// Creates a vocabulary from an explicit skill list.
    ///
    /// Entries are trimmed; blanks are dropped.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let skills = skills
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { skills }
    }

    /// Parses a vocabulary from YAML (a plain sequence of strings).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidationError> {
        let skills: Vec<String> = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("skill_vocabulary", e.to_string()))?;
        Ok(Self::new(skills))
    }

    /// Returns the built-in vocabulary.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Iterates skill names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Number of known skills.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Returns true when the vocabulary holds no skills.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
