//! BioKG NER — best-effort named-entity enrichment.
//!
//! The `NerBackend` trait abstracts over entity recognition.
//! Implementations:
//! - `OnnxNer`: ONNX Runtime token-classification model (requires the
//!   `onnx` feature and model files on disk)
//! - `NoopNer`: returns no entities, signalling that enrichment is absent
//!
//! Callers get the same four-bucket `CandidateSet` shape either way;
//! a missing or broken model never fails a build.

pub mod enrich;
pub mod labels;
pub mod onnx_ner;

pub use enrich::enrich;
pub use labels::EntityLabel;

#[cfg(feature = "onnx")]
pub use onnx_ner::OnnxNer;

use std::path::Path;
use std::sync::Arc;

/// One recognized entity: its surface text and model label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntity {
    pub text: String,
    pub label: EntityLabel,
}

impl NamedEntity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Trait for named-entity recognition backends.
pub trait NerBackend: Send + Sync {
    /// Recognize entities in a text. Recognition failures are handled
    /// inside the backend and surface as an empty result.
    fn recognize(&self, text: &str) -> Vec<NamedEntity>;

    /// Check if a model is actually loaded.
    fn is_available(&self) -> bool;
}

/// Placeholder backend used when no model is available.
pub struct NoopNer;

impl NerBackend for NoopNer {
    fn recognize(&self, _text: &str) -> Vec<NamedEntity> {
        Vec::new()
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Create the best available NER backend for the given model directory.
///
/// Tries ONNX first (if the feature is enabled and model files are
/// present), falls back to `NoopNer`. Any load error degrades to the
/// no-op backend rather than failing the pipeline.
pub fn create_ner(model_dir: &Path) -> Arc<dyn NerBackend> {
    #[cfg(feature = "onnx")]
    {
        match OnnxNer::load(model_dir) {
            Ok(ner) => {
                tracing::info!("Using ONNX NER backend");
                return Arc::new(ner);
            }
            Err(e) => {
                tracing::warn!("ONNX NER unavailable: {}. Proceeding without NLP.", e);
            }
        }
    }

    #[cfg(not(feature = "onnx"))]
    {
        let _ = model_dir;
        tracing::info!("ONNX feature disabled. Proceeding without NLP.");
    }

    Arc::new(NoopNer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_is_absent_and_empty() {
        let ner = NoopNer;
        assert!(!ner.is_available());
        assert!(ner.recognize("Microgravity caused bone loss in mice").is_empty());
    }
}
