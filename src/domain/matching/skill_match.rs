//! Skill evidence matching.

use crate::domain::foundation::{contains_term, Score, SkillSet};

use super::SkillFamilies;

/// Result of matching one accomplishment text against requirement skills.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// Requirement skills evidenced by the text, in requirement order.
    pub matched: Vec<String>,
    /// Distinct matches over distinct requirement skills.
    pub score: Score,
}

/// Matches accomplishment text against the requirement skill set.
///
/// Matching is case-insensitive and word-boundary aware. A requirement
/// skill also counts as matched when any of its family members appears in
/// the text, so "aws" evidences "cloud infrastructure".
pub fn match_skills(text: &str, skills: &SkillSet, families: &SkillFamilies) -> SkillMatch {
    if skills.is_empty() {
        return SkillMatch {
            matched: Vec::new(),
            score: Score::ZERO,
        };
    }

    let lowered = text.to_lowercase();
    let mut matched = Vec::new();

    for skill in skills.iter() {
        let skill_lower = skill.to_lowercase();
        let direct = contains_term(&lowered, &skill_lower);
        let via_family = !direct
            && families
                .members_of(&skill_lower)
                .is_some_and(|members| members.iter().any(|m| contains_term(&lowered, m)));

        if direct || via_family {
            matched.push(skill.to_string());
        }
    }

    let score = Score::new(matched.len() as f64 / skills.len() as f64);
    SkillMatch { matched, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> SkillSet {
        SkillSet::from_iter(names.iter().copied())
    }

    #[test]
    fn matches_are_case_insensitive() {
        let result = match_skills(
            "Migrated services to PYTHON and PostgreSQL",
            &skills(&["python", "postgresql", "rust"]),
            &SkillFamilies::empty(),
        );

        assert_eq!(result.matched, vec!["python", "postgresql"]);
        assert!((result.score.value() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn word_boundaries_prevent_substring_hits() {
        let result = match_skills(
            "Wrote javascript all day",
            &skills(&["java"]),
            &SkillFamilies::empty(),
        );
        assert!(result.matched.is_empty());
        assert_eq!(result.score, Score::ZERO);
    }

    #[test]
    fn family_member_evidences_family_skill() {
        let mut families = SkillFamilies::empty();
        families.insert("cloud infrastructure", ["aws", "gcp"]);

        let result = match_skills(
            "Provisioned AWS accounts for every team",
            &skills(&["cloud infrastructure"]),
            &families,
        );

        assert_eq!(result.matched, vec!["cloud infrastructure"]);
        assert_eq!(result.score, Score::MAX);
    }

    #[test]
    fn direct_match_not_double_counted_with_family() {
        let mut families = SkillFamilies::empty();
        families.insert("kubernetes", ["helm"]);

        let result = match_skills(
            "Ran kubernetes with helm charts",
            &skills(&["kubernetes"]),
            &families,
        );
        assert_eq!(result.matched.len(), 1);
    }

    #[test]
    fn empty_skill_set_scores_zero() {
        let result = match_skills("anything", &SkillSet::new(), &SkillFamilies::empty());
        assert_eq!(result.score, Score::ZERO);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn no_overlap_scores_zero() {
        let result = match_skills(
            "Organized the company picnic",
            &skills(&["rust", "sql"]),
            &SkillFamilies::empty(),
        );
        assert_eq!(result.score, Score::ZERO);
    }
}
