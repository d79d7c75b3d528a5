//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of characters of concatenated document text fed to
/// extraction. Bounds the substring-scan cost per document.
pub const MAX_TEXT_CHARS: usize = 200_000;

/// Maximum number of characters in a node label after normalization.
pub const MAX_LABEL_CHARS: usize = 300;

/// Paths to all BioKG data directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Per-document parsed JSON files (`data/parsed_texts/`).
    pub parsed: PathBuf,
    /// Knowledge graph output (`data/kg/`).
    pub kg: PathBuf,
    /// NER model directory (`data/models/`).
    pub models: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            parsed: root.join("parsed_texts"),
            kg: root.join("kg"),
            models: root.join("models"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    /// Create all required directories.
    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.parsed)?;
        std::fs::create_dir_all(&self.kg)?;
        std::fs::create_dir_all(&self.models)?;
        Ok(())
    }

    /// Path of the serialized node list.
    pub fn nodes_file(&self) -> PathBuf {
        self.kg.join("nodes.json")
    }

    /// Path of the serialized edge list.
    pub fn edges_file(&self) -> PathBuf {
        self.kg.join("edges.json")
    }
}

/// Top-level build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Concatenated document text cap, in characters.
    pub max_text_chars: usize,
    /// Node label cap, in characters.
    pub max_label_chars: usize,
}

impl BuildConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let max_text_chars = std::env::var("BIOKG_MAX_TEXT_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(MAX_TEXT_CHARS);

        let max_label_chars = std::env::var("BIOKG_MAX_LABEL_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(MAX_LABEL_CHARS);

        let mut data_paths = DataPaths::new(data_dir)?;
        if let Ok(model_dir) = std::env::var("BIOKG_MODEL_DIR") {
            data_paths.models = PathBuf::from(model_dir);
            std::fs::create_dir_all(&data_paths.models)?;
        }

        Ok(Self {
            data_paths,
            max_text_chars,
            max_label_chars,
        })
    }
}
