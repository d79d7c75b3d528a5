//! Per-document candidate sets and the heuristic extractor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::terms::{BIO_SYSTEM_TERMS, EFFECT_TERMS, EXPERIMENT_TERMS, PROJECT_TERMS};

/// Typed candidate term sets for one document.
///
/// Ordered sets so downstream iteration is deterministic without sorting
/// at the use site. Duplicates are impossible by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    pub experiments: BTreeSet<String>,
    pub projects: BTreeSet<String>,
    pub bio_systems: BTreeSet<String>,
    pub effects: BTreeSet<String>,
}

impl CandidateSet {
    /// Union another candidate set into this one. Terms present in both
    /// sources collapse to a single entry.
    pub fn merge(&mut self, other: CandidateSet) {
        self.experiments.extend(other.experiments);
        self.projects.extend(other.projects);
        self.bio_systems.extend(other.bio_systems);
        self.effects.extend(other.effects);
    }

    /// Total number of candidate terms across all four buckets.
    pub fn len(&self) -> usize {
        self.experiments.len() + self.projects.len() + self.bio_systems.len() + self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if every bucket of `self` is contained in the matching bucket
    /// of `other`.
    pub fn is_subset(&self, other: &CandidateSet) -> bool {
        self.experiments.is_subset(&other.experiments)
            && self.projects.is_subset(&other.projects)
            && self.bio_systems.is_subset(&other.bio_systems)
            && self.effects.is_subset(&other.effects)
    }
}

/// Heuristic candidate extraction: case-insensitive substring scan of the
/// text against each dictionary. On match, the original-case dictionary
/// term (not the matched span) is recorded.
pub fn extract_candidates(text: &str) -> CandidateSet {
    let text_low = text.to_lowercase();
    let mut cands = CandidateSet::default();

    for &term in BIO_SYSTEM_TERMS {
        if text_low.contains(&term.to_lowercase()) {
            cands.bio_systems.insert(term.to_string());
        }
    }
    for &term in EFFECT_TERMS {
        if text_low.contains(&term.to_lowercase()) {
            cands.effects.insert(term.to_string());
        }
    }
    for &term in EXPERIMENT_TERMS {
        if text_low.contains(&term.to_lowercase()) {
            cands.experiments.insert(term.to_string());
        }
    }
    for &term in PROJECT_TERMS {
        if text_low.contains(&term.to_lowercase()) {
            cands.projects.insert(term.to_string());
        }
    }

    cands
}
