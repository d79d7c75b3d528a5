//! BioKG Extract — heuristic candidate extraction for the knowledge graph.
//!
//! Scans publication text for occurrences of fixed domain vocabulary
//! (biological systems, effects, experiments, projects) using
//! case-insensitive substring containment. No fuzzy matching; the
//! original-case dictionary term is what ends up in the candidate set.

pub mod candidates;
pub mod terms;

pub use candidates::{extract_candidates, CandidateSet};
pub use terms::{BIO_SYSTEM_TERMS, EFFECT_TERMS, EXPERIMENT_TERMS, PROJECT_TERMS};

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse internal whitespace, trim, and cap a label at `max_chars`.
///
/// The cap is in characters, not bytes, so multi-byte labels never get
/// split mid-codepoint.
pub fn normalize_label(text: &str, max_chars: usize) -> String {
    let collapsed = WHITESPACE.replace_all(text.trim(), " ");
    if collapsed.chars().count() <= max_chars {
        collapsed.into_owned()
    } else {
        collapsed.chars().take(max_chars).collect()
    }
}
