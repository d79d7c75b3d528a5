//! Sorted directory scan over parsed JSON files.

use std::path::Path;

use tracing::{info, warn};

use biokg_core::Result;

use crate::document::{Document, ParsedDocument};

/// Result of scanning one input directory.
#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    /// Successfully parsed documents, in sorted filename order.
    pub documents: Vec<Document>,
    /// Number of files that failed to read or parse.
    pub skipped: usize,
}

/// Read every `*.json` file in `dir`, in sorted filename order.
///
/// A file that cannot be read or does not deserialize is logged and
/// skipped; an unreadable directory is a setup error and propagates.
/// Positional fallback labels number the parsed documents from 1.
pub fn read_parsed_dir(dir: &Path, max_text_chars: usize) -> Result<ReadOutcome> {
    let mut files: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    files.sort();

    info!("Found {} parsed JSON files in {}", files.len(), dir.display());

    let mut outcome = ReadOutcome::default();
    for path in files {
        let parsed: ParsedDocument = match read_one(&path) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                outcome.skipped += 1;
                continue;
            }
        };
        let index = outcome.documents.len() + 1;
        outcome
            .documents
            .push(parsed.into_document(index, max_text_chars));
    }

    Ok(outcome)
}

/// Read and deserialize a single document file.
fn read_one(path: &Path) -> Result<ParsedDocument> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| biokg_core::Error::Input(format!("unreadable file: {}", e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| biokg_core::Error::Input(format!("malformed document JSON: {}", e)))
}
