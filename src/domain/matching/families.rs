//! Skill family expansion table.
//!
//! A posting may ask for a broad capability ("cloud infrastructure") that a
//! candidate evidences through a specific technology ("aws"). The family
//! table maps each broad skill to the technologies that count as evidence
//! for it. It is swappable data: the built-in table ships as YAML and
//! callers can load their own.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::ValidationError;

static BUILTIN: Lazy<SkillFamilies> = Lazy::new(|| {
    SkillFamilies::from_yaml_str(include_str!("../../../data/skill_families.yaml"))
        .expect("built-in skill family table is valid YAML")
});

/// Mapping from a family skill name to its member technologies.
///
/// Keys and members are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFamilies {
    families: HashMap<String, Vec<String>>,
}

impl SkillFamilies {
    /// Creates an empty table (no expansion).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the built-in table.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parses a table from YAML (a mapping of family name to member list).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidationError> {
        let raw: HashMap<String, Vec<String>> = serde_yaml::from_str(yaml)
            .map_err(|e| ValidationError::invalid_format("skill_families", e.to_string()))?;

        let mut table = Self::empty();
        for (family, members) in raw {
            table.insert(family, members);
        }
        Ok(table)
    }

    /// Adds or replaces one family.
    pub fn insert<I, S>(&mut self, family: impl Into<String>, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = members
            .into_iter()
            .map(|m| m.into().trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        self.families
            .insert(family.into().trim().to_lowercase(), members);
    }

    /// Returns the member technologies of a family skill, if it is one.
    ///
    /// Lookup is case-insensitive.
    pub fn members_of(&self, family: &str) -> Option<&[String]> {
        self.families
            .get(&family.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    /// Returns true when no families are defined.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
