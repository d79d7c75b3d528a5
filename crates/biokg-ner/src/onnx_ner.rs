//! ONNX-based named-entity recognition backend.
//!
//! Loads a token-classification model (BIO-tagged NER) and its tokenizer
//! to recognize entities in publication text. Requires the `onnx` feature.

#[cfg(feature = "onnx")]
mod inner {
    use std::path::Path;
    use std::sync::Arc;

    use ort::session::Session;
    use ort::value::Tensor;
    use parking_lot::Mutex;
    use tokenizers::Tokenizer;
    use tracing::{info, warn};

    use biokg_core::Error;

    use crate::labels::EntityLabel;
    use crate::{NamedEntity, NerBackend};

    /// Maximum sequence length for the model.
    const MAX_SEQ_LEN: usize = 512;

    /// ONNX NER backend over a BIO-tagged token-classification model.
    pub struct OnnxNer {
        session: Arc<Mutex<Session>>,
        tokenizer: Tokenizer,
        /// Tag-id → tag string (e.g. `"B-ORG"`), from `labels.json`.
        tags: Vec<String>,
    }

    impl OnnxNer {
        /// Load an ONNX model, tokenizer, and tag list from the given directory.
        ///
        /// Expects:
        /// - `model_dir/model.onnx` — the ONNX model file
        /// - `model_dir/tokenizer.json` — the HuggingFace tokenizer
        /// - `model_dir/labels.json` — JSON array of tag strings, by id
        pub fn load(model_dir: &Path) -> Result<Self, Error> {
            let model_path = model_dir.join("model.onnx");
            let tokenizer_path = model_dir.join("tokenizer.json");
            let labels_path = model_dir.join("labels.json");

            if !model_path.exists() {
                return Err(Error::Enrichment(format!(
                    "model not found: {}",
                    model_path.display()
                )));
            }
            if !tokenizer_path.exists() {
                return Err(Error::Enrichment(format!(
                    "tokenizer not found: {}",
                    tokenizer_path.display()
                )));
            }
            if !labels_path.exists() {
                return Err(Error::Enrichment(format!(
                    "tag list not found: {}",
                    labels_path.display()
                )));
            }

            // Initialize ONNX Runtime environment.
            // With load-dynamic feature, ORT_DYLIB_PATH env var must point to libonnxruntime.so
            ort::init().commit();

            let session = Session::builder()
                .map_err(|e| Error::Enrichment(format!("failed to create session builder: {}", e)))?
                .with_intra_threads(2)
                .map_err(|e| Error::Enrichment(format!("failed to set threads: {}", e)))?
                .commit_from_file(&model_path)
                .map_err(|e| Error::Enrichment(format!("failed to load ONNX model: {}", e)))?;

            let tokenizer = Tokenizer::from_file(&tokenizer_path)
                .map_err(|e| Error::Enrichment(format!("failed to load tokenizer: {}", e)))?;

            let tags: Vec<String> = std::fs::read_to_string(&labels_path)
                .map_err(|e| Error::Enrichment(format!("failed to read tag list: {}", e)))
                .and_then(|raw| {
                    serde_json::from_str(&raw)
                        .map_err(|e| Error::Enrichment(format!("invalid tag list: {}", e)))
                })?;

            info!(
                "ONNX NER loaded: {} tags, model={}",
                tags.len(),
                model_path.display()
            );

            Ok(Self {
                session: Arc::new(Mutex::new(session)),
                tokenizer,
                tags,
            })
        }

        /// Run inference and aggregate BIO tags into entity spans.
        fn infer(&self, text: &str) -> Option<Vec<NamedEntity>> {
            // Tokenize
            let encoding = self
                .tokenizer
                .encode(text, true)
                .map_err(|e| {
                    warn!("Tokenization failed: {}", e);
                    e
                })
                .ok()?;

            let input_ids = encoding.get_ids();
            let attention_mask = encoding.get_attention_mask();
            let offsets = encoding.get_offsets();

            // Truncate to max sequence length
            let seq_len = input_ids.len().min(MAX_SEQ_LEN);
            let input_ids = &input_ids[..seq_len];
            let attention_mask = &attention_mask[..seq_len];
            let offsets = &offsets[..seq_len];

            // Build input tensors via ort::Tensor::from_array with (shape, data) tuples
            let ids_data: Vec<i64> = input_ids.iter().map(|&id| id as i64).collect();
            let mask_data: Vec<i64> = attention_mask.iter().map(|&m| m as i64).collect();
            let type_ids_data: Vec<i64> = vec![0i64; seq_len];

            let ids_tensor = Tensor::from_array(([1usize, seq_len], ids_data))
                .map_err(|e| warn!("Failed to create ids tensor: {}", e))
                .ok()?;
            let mask_tensor = Tensor::from_array(([1usize, seq_len], mask_data))
                .map_err(|e| warn!("Failed to create mask tensor: {}", e))
                .ok()?;
            let type_ids_tensor = Tensor::from_array(([1usize, seq_len], type_ids_data))
                .map_err(|e| warn!("Failed to create type_ids tensor: {}", e))
                .ok()?;

            let mut session = self.session.lock();
            let outputs = session
                .run(ort::inputs![ids_tensor, mask_tensor, type_ids_tensor])
                .map_err(|e| {
                    warn!("ONNX inference failed: {}", e);
                    e
                })
                .ok()?;

            // Logits [1, seq_len, num_tags] → per-token argmax
            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| {
                    warn!("Failed to extract output tensor: {}", e);
                    e
                })
                .ok()?;

            let shape_dims: Vec<i64> = shape.iter().copied().collect();
            if shape_dims.len() != 3 || shape_dims[1] as usize != seq_len {
                warn!("Unexpected output shape: {:?}", shape_dims);
                return None;
            }
            let num_tags = shape_dims[2] as usize;
            if num_tags == 0 || num_tags != self.tags.len() {
                warn!(
                    "Model emits {} tags but tag list has {}",
                    num_tags,
                    self.tags.len()
                );
                return None;
            }

            let mut entities = Vec::new();
            // Current open span: (byte_start, byte_end, label)
            let mut open: Option<(usize, usize, EntityLabel)> = None;

            for (i, &(start, end)) in offsets.iter().enumerate() {
                // Special tokens carry empty offsets; they close any open span.
                let tag = if start == end || attention_mask[i] == 0 {
                    None
                } else {
                    let logits = &data[i * num_tags..(i + 1) * num_tags];
                    let tag_idx = argmax(logits);
                    Some(self.tags[tag_idx].as_str())
                };

                match tag.and_then(|t| EntityLabel::from_tag(t).map(|l| (t, l))) {
                    None => {
                        Self::close_span(text, &mut open, &mut entities);
                    }
                    Some((tag, label)) => {
                        let begins = tag.starts_with("B-") || tag.starts_with("b-");
                        match &mut open {
                            Some((_, open_end, open_label))
                                if !begins && *open_label == label =>
                            {
                                *open_end = end;
                            }
                            _ => {
                                Self::close_span(text, &mut open, &mut entities);
                                open = Some((start, end, label));
                            }
                        }
                    }
                }
            }
            Self::close_span(text, &mut open, &mut entities);

            Some(entities)
        }

        fn close_span(
            text: &str,
            open: &mut Option<(usize, usize, EntityLabel)>,
            entities: &mut Vec<NamedEntity>,
        ) {
            if let Some((start, end, label)) = open.take() {
                if let Some(span) = text.get(start..end) {
                    if !span.trim().is_empty() {
                        entities.push(NamedEntity::new(span, label));
                    }
                }
            }
        }
    }

    /// Index of the largest logit.
    fn argmax(logits: &[f32]) -> usize {
        let mut best = 0;
        for (i, &v) in logits.iter().enumerate() {
            if v > logits[best] {
                best = i;
            }
        }
        best
    }

    impl NerBackend for OnnxNer {
        fn recognize(&self, text: &str) -> Vec<NamedEntity> {
            self.infer(text).unwrap_or_default()
        }

        fn is_available(&self) -> bool {
            true
        }
    }
}

#[cfg(feature = "onnx")]
pub use inner::OnnxNer;
