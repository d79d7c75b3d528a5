//! Entity label vocabulary shared by all NER backends.

use serde::{Deserialize, Serialize};

/// Coarse entity labels as emitted by NER models.
///
/// Covers the label set the reclassification rules care about; anything
/// else maps to `Other` and only matters through the substring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Org,
    Fac,
    Product,
    Norp,
    Gpe,
    Loc,
    Event,
    Phenomenon,
    Disease,
    Symptom,
    Other,
}

impl EntityLabel {
    /// Parse a model tag such as `ORG`, `B-ORG`, or `i-disease`.
    ///
    /// Returns `None` for the outside tag `O` (and empty tags), since an
    /// outside token is not an entity at all.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag
            .strip_prefix("B-")
            .or_else(|| tag.strip_prefix("I-"))
            .or_else(|| tag.strip_prefix("b-"))
            .or_else(|| tag.strip_prefix("i-"))
            .unwrap_or(tag);
        match tag.to_uppercase().as_str() {
            "" | "O" => None,
            "PERSON" | "PER" => Some(Self::Person),
            "ORG" | "ORGANIZATION" => Some(Self::Org),
            "FAC" | "FACILITY" => Some(Self::Fac),
            "PRODUCT" => Some(Self::Product),
            "NORP" => Some(Self::Norp),
            "GPE" => Some(Self::Gpe),
            "LOC" | "LOCATION" => Some(Self::Loc),
            "EVENT" => Some(Self::Event),
            "PHENOMENON" => Some(Self::Phenomenon),
            "DISEASE" => Some(Self::Disease),
            "SYMPTOM" => Some(Self::Symptom),
            _ => Some(Self::Other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_strips_bio_prefix() {
        assert_eq!(EntityLabel::from_tag("B-ORG"), Some(EntityLabel::Org));
        assert_eq!(EntityLabel::from_tag("I-ORG"), Some(EntityLabel::Org));
        assert_eq!(EntityLabel::from_tag("i-disease"), Some(EntityLabel::Disease));
    }

    #[test]
    fn test_from_tag_outside_is_none() {
        assert_eq!(EntityLabel::from_tag("O"), None);
        assert_eq!(EntityLabel::from_tag(""), None);
    }

    #[test]
    fn test_from_tag_unknown_is_other() {
        assert_eq!(EntityLabel::from_tag("WORK_OF_ART"), Some(EntityLabel::Other));
    }
}
