//! BioKG Ingest — reads per-publication parsed JSON files into documents.
//!
//! One input file is one document: an optional title plus whatever text
//! fields the upstream parser produced. Malformed files are logged and
//! skipped; they never abort a build.

pub mod document;
pub mod reader;

pub use document::{Document, ParsedDocument};
pub use reader::{read_parsed_dir, ReadOutcome};
