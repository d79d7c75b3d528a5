//! Reclassifies recognized entities into the four candidate buckets.

use biokg_extract::{
    normalize_label, CandidateSet, BIO_SYSTEM_TERMS, EFFECT_TERMS, PROJECT_TERMS,
};

use crate::labels::EntityLabel;
use crate::NerBackend;

/// Substrings that mark an entity as an experimental context.
const EXPERIMENT_HINTS: &[&str] = &[
    "experiment",
    "study",
    "mission",
    "flight",
    "spaceflight",
    "iss",
];

/// Run entity recognition and map the results into candidate buckets.
///
/// Absent backends yield an empty set. Classification is label + substring
/// heuristics with a fixed precedence: Project, then Experiment, then
/// Biological System, then Effect. The first matching rule wins and an
/// entity lands in at most one bucket.
pub fn enrich(ner: &dyn NerBackend, text: &str, max_label_chars: usize) -> CandidateSet {
    let mut buckets = CandidateSet::default();
    if !ner.is_available() {
        return buckets;
    }

    for entity in ner.recognize(text) {
        let value = normalize_label(&entity.text, max_label_chars);
        if value.is_empty() {
            continue;
        }
        let value_low = value.to_lowercase();

        if matches!(entity.label, EntityLabel::Org | EntityLabel::Fac)
            && contains_any_ci(&value_low, PROJECT_TERMS)
        {
            buckets.projects.insert(value);
        } else if matches!(
            entity.label,
            EntityLabel::Person | EntityLabel::Org | EntityLabel::Product
        ) && contains_any_ci(&value_low, EXPERIMENT_HINTS)
        {
            buckets.experiments.insert(value);
        } else if matches!(
            entity.label,
            EntityLabel::Norp | EntityLabel::Org | EntityLabel::Gpe | EntityLabel::Loc
        ) && contains_any_ci(&value_low, BIO_SYSTEM_TERMS)
        {
            buckets.bio_systems.insert(value);
        } else if matches!(
            entity.label,
            EntityLabel::Event | EntityLabel::Phenomenon | EntityLabel::Disease | EntityLabel::Symptom
        ) || contains_any_ci(&value_low, EFFECT_TERMS)
        {
            buckets.effects.insert(value);
        }
    }

    buckets
}

/// True if the lower-cased haystack contains any of the terms,
/// case-insensitively.
fn contains_any_ci(haystack_low: &str, terms: &[&str]) -> bool {
    terms
        .iter()
        .any(|term| haystack_low.contains(&term.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NamedEntity, NoopNer};

    /// Test backend that replays a fixed entity list.
    struct FixedNer(Vec<NamedEntity>);

    impl NerBackend for FixedNer {
        fn recognize(&self, _text: &str) -> Vec<NamedEntity> {
            self.0.clone()
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_absent_backend_yields_empty_buckets() {
        let buckets = enrich(&NoopNer, "bone loss in mice", 300);
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_org_with_project_term_is_project() {
        let ner = FixedNer(vec![NamedEntity::new("NASA Task Book", EntityLabel::Org)]);
        let buckets = enrich(&ner, "", 300);
        assert!(buckets.projects.contains("NASA Task Book"));
        assert!(buckets.experiments.is_empty());
    }

    #[test]
    fn test_product_with_hint_is_experiment() {
        let ner = FixedNer(vec![NamedEntity::new(
            "Rodent Research-1 Mission",
            EntityLabel::Product,
        )]);
        let buckets = enrich(&ner, "", 300);
        assert!(buckets.experiments.contains("Rodent Research-1 Mission"));
    }

    #[test]
    fn test_disease_label_is_effect_without_substring() {
        let ner = FixedNer(vec![NamedEntity::new("osteopenia", EntityLabel::Disease)]);
        let buckets = enrich(&ner, "", 300);
        assert!(buckets.effects.contains("osteopenia"));
    }

    #[test]
    fn test_effect_substring_wins_regardless_of_label() {
        let ner = FixedNer(vec![NamedEntity::new(
            "severe bone loss",
            EntityLabel::Other,
        )]);
        let buckets = enrich(&ner, "", 300);
        assert!(buckets.effects.contains("severe bone loss"));
    }

    #[test]
    fn test_precedence_project_beats_experiment() {
        // An ORG entity matching both the project dictionary ("grant") and
        // an experiment hint ("study") must land in Project only.
        let ner = FixedNer(vec![NamedEntity::new(
            "Space Biology Grant Study",
            EntityLabel::Org,
        )]);
        let buckets = enrich(&ner, "", 300);
        assert!(buckets.projects.contains("Space Biology Grant Study"));
        assert!(buckets.experiments.is_empty());
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn test_precedence_experiment_beats_bio_system() {
        // ORG matching an experiment hint ("mission") and a bio-system term
        // ("crew") goes to Experiment.
        let ner = FixedNer(vec![NamedEntity::new(
            "Crew Mission Control",
            EntityLabel::Org,
        )]);
        let buckets = enrich(&ner, "", 300);
        assert!(buckets.experiments.contains("Crew Mission Control"));
        assert!(buckets.bio_systems.is_empty());
    }

    #[test]
    fn test_precedence_bio_system_beats_effect() {
        // ORG matching a bio-system term ("cell") and an effect term
        // ("growth") goes to Biological System.
        let ner = FixedNer(vec![NamedEntity::new(
            "Cell Growth Institute",
            EntityLabel::Org,
        )]);
        let buckets = enrich(&ner, "", 300);
        assert!(buckets.bio_systems.contains("Cell Growth Institute"));
        assert!(buckets.effects.is_empty());
    }

    #[test]
    fn test_entity_text_is_normalized() {
        let ner = FixedNer(vec![NamedEntity::new(
            "  bone \n loss   syndrome ",
            EntityLabel::Disease,
        )]);
        let buckets = enrich(&ner, "", 300);
        assert!(buckets.effects.contains("bone loss syndrome"));
    }

    #[test]
    fn test_unmatched_entity_is_dropped() {
        let ner = FixedNer(vec![NamedEntity::new("John Smith", EntityLabel::Person)]);
        let buckets = enrich(&ner, "", 300);
        assert!(buckets.is_empty());
    }
}
