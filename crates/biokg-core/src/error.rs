//! Error types for BioKG.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Enrichment error: {0}")]
    Enrichment(String),

    #[error("Graph write failure: {0}")]
    GraphWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
