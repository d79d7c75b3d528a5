//! Fixed domain vocabulary used as match targets.
//!
//! Pure data. Matching is case-insensitive substring containment against
//! lower-cased document text; the entries here are what get stored in
//! candidate sets, original case preserved.

/// Organisms, tissues, and cell types studied in space biology.
pub static BIO_SYSTEM_TERMS: &[&str] = &[
    "human", "astronaut", "crew", "mouse", "mice", "rodent", "rat", "rats",
    "plant", "arabidopsis", "seedling", "yeast", "drosophila", "zebrafish",
    "cell", "cells", "endothelial", "osteoblast", "osteoclast", "tissue",
];

/// Observed biological effects and responses.
pub static EFFECT_TERMS: &[&str] = &[
    "bone density", "bone loss", "muscle atrophy", "immune response",
    "gene expression", "oxidative stress", "radiation damage",
    "microgravity adaptation", "growth", "cell proliferation", "apoptosis",
    "inflammation", "tumor", "DNA damage",
];

/// Experimental contexts and conditions.
pub static EXPERIMENT_TERMS: &[&str] = &[
    "experiment", "study", "mission", "flight", "spaceflight", "ISS",
    "Shuttle", "ground control", "exposure", "radiation", "microgravity",
];

/// Funding programs and project vocabulary.
pub static PROJECT_TERMS: &[&str] = &[
    "project", "grant", "award", "BPS", "HRP", "Task Book", "NASA Task Book",
];
