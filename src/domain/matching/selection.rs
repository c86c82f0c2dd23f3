//! Constrained top-N accomplishment selection.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AccomplishmentId;

use super::ScoredAccomplishment;

/// Policy bounding a selection pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Hard cap on the number of selected items.
    pub max_count: usize,
    /// Items scoring below this are dropped outright.
    pub min_score: f64,
    /// Fraction of slots soft-reserved for current-role items, in [0, 1].
    pub current_role_preference: f64,
    /// Hard cap on items per employer; `None` means unbounded.
    pub max_per_company: Option<usize>,
}

impl SelectionPolicy {
    /// Creates a policy with the given slot count and no other constraints.
    pub fn new(max_count: usize) -> Self {
        Self {
            max_count,
            min_score: 0.0,
            current_role_preference: 0.0,
            max_per_company: None,
        }
    }

    /// Sets the minimum final score.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Sets the current-role slot preference.
    pub fn with_current_role_preference(mut self, preference: f64) -> Self {
        self.current_role_preference = preference;
        self
    }

    /// Sets the per-employer cap.
    pub fn with_max_per_company(mut self, cap: usize) -> Self {
        self.max_per_company = Some(cap);
        self
    }

    /// Number of slots soft-reserved for current-role items.
    fn reserved_slots(&self) -> usize {
        let preference = self.current_role_preference.clamp(0.0, 1.0);
        ((preference * self.max_count as f64).floor() as usize).min(self.max_count)
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::new(8)
    }
}

/// Selects the top accomplishments under the given policy.
///
/// Ranking is by final score descending with stable ties. Up to
/// `current_role_preference * max_count` slots are preferentially filled by
/// current-role items before the best remaining items fill the rest. The
/// per-employer cap is hard: once an employer has contributed its quota,
/// further items from it are skipped even if they would otherwise qualify.
pub fn select_top(
    scored: &[ScoredAccomplishment],
    policy: &SelectionPolicy,
) -> Vec<ScoredAccomplishment> {
    if policy.max_count == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<&ScoredAccomplishment> = scored
        .iter()
        .filter(|s| s.final_score.value() >= policy.min_score)
        .collect();
    ranked.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });

    let mut picked: Vec<&ScoredAccomplishment> = Vec::new();
    let mut picked_ids: HashSet<AccomplishmentId> = HashSet::new();
    let mut per_company: HashMap<String, usize> = HashMap::new();

    let company_open = |per_company: &HashMap<String, usize>, item: &ScoredAccomplishment| {
        policy.max_per_company.map_or(true, |cap| {
            per_company
                .get(&item.company_name.to_lowercase())
                .copied()
                .unwrap_or(0)
                < cap
        })
    };

    // Soft quota: current-role items first, up to the reserved slots.
    let reserved = policy.reserved_slots();
    for item in ranked.iter().filter(|s| s.is_current) {
        if picked.len() >= reserved {
            break;
        }
        if company_open(&per_company, item) {
            *per_company
                .entry(item.company_name.to_lowercase())
                .or_insert(0) += 1;
            picked_ids.insert(item.id);
            picked.push(item);
        }
    }

    // Fill the remainder with the best remaining items regardless of recency.
    for item in &ranked {
        if picked.len() >= policy.max_count {
            break;
        }
        if picked_ids.contains(&item.id) {
            continue;
        }
        if company_open(&per_company, item) {
            *per_company
                .entry(item.company_name.to_lowercase())
                .or_insert(0) += 1;
            picked_ids.insert(item.id);
            picked.push(item);
        }
    }

    // Restore global score ordering across the two passes.
    picked.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });

    picked.into_iter().cloned().collect()
}
