//! Case-insensitively de-duplicated skill collection.

use serde::{Deserialize, Serialize};

/// An insertion-ordered set of skill names.
///
/// Invariant: no two entries are equal ignoring case. The first spelling
/// seen wins; later case variants are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    items: Vec<String>,
}

impl SkillSet {
    /// Creates an empty skill set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a skill set from an iterator, de-duplicating case-insensitively.
    pub fn from_iter<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }

    /// Inserts a skill, returning true if it was not already present.
    ///
    /// Blank entries are ignored.
    pub fn insert(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        let trimmed = skill.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// Checks membership ignoring case.
    pub fn contains(&self, skill: &str) -> bool {
        let lowered = skill.trim().to_lowercase();
        self.items.iter().any(|s| s.to_lowercase() == lowered)
    }

    /// Returns the union of two sets, keeping this set's entries first.
    pub fn union(&self, other: &SkillSet) -> SkillSet {
        let mut merged = self.clone();
        for skill in other.iter() {
            merged.insert(skill);
        }
        merged
    }

    /// Iterates skills in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Number of distinct skills.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the set holds no skills.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(items: Vec<String>) -> Self {
        Self::from_iter(items)
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_deduplicates_case_insensitively() {
        let mut set = SkillSet::new();
        assert!(set.insert("Rust"));
        assert!(!set.insert("rust"));
        assert!(!set.insert("RUST"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insert_ignores_blank_entries() {
        let mut set = SkillSet::new();
        assert!(!set.insert("   "));
        assert!(set.is_empty());
    }

    #[test]
    fn first_spelling_wins() {
        let set = SkillSet::from_iter(["PostgreSQL", "postgresql"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["PostgreSQL"]);
    }

    #[test]
    fn union_deduplicates_across_sets() {
        let a = SkillSet::from_iter(["Skill-A", "Skill-B"]);
        let b = SkillSet::from_iter(["skill-a", "Skill-C"]);

        let merged = a.union(&b);
        assert_eq!(merged.len(), 3);
        assert!(merged.contains("skill-b"));
        assert!(merged.contains("SKILL-C"));
    }

    #[test]
    fn preserves_insertion_order() {
        let set = SkillSet::from_iter(["python", "rust", "sql"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["python", "rust", "sql"]);
    }

    #[test]
    fn deserialization_restores_invariant() {
        let set: SkillSet = serde_json::from_str(r#"["Go", "go", "Rust"]"#).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_as_plain_list() {
        let set = SkillSet::from_iter(["a", "b"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
