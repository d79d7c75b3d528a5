//! One full graph build: read documents, extract, enrich, assemble, write.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use biokg_core::{BuildConfig, Result};
use biokg_extract::extract_candidates;
use biokg_graph::{write_graph, BuildContext, GraphStats};
use biokg_ingest::read_parsed_dir;
use biokg_ner::{enrich, NerBackend};

/// Summary of one build run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub documents_processed: usize,
    pub documents_skipped: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
}

/// Batch pipeline that rebuilds the graph from scratch.
///
/// One run is one pass: documents are processed sequentially in sorted
/// filename order, the node/edge collections start empty, and the output
/// files are replaced wholesale at the end. Per-document problems are
/// recovered locally; only setup and output errors propagate.
pub struct BuildPipeline;

impl BuildPipeline {
    pub fn run(config: &BuildConfig, ner: &dyn NerBackend) -> Result<BuildReport> {
        let start = std::time::Instant::now();
        let started_at = Utc::now();

        let outcome = read_parsed_dir(&config.data_paths.parsed, config.max_text_chars)?;

        let mut ctx = BuildContext::new(config.max_label_chars);
        for document in &outcome.documents {
            info!("Processing: {}", document.label);

            let mut candidates = extract_candidates(&document.text);
            let enriched = enrich(ner, &document.text, config.max_label_chars);
            if !enriched.is_empty() {
                debug!(
                    "NLP enrichment added {} candidates for {}",
                    enriched.len(),
                    document.label
                );
            }
            candidates.merge(enriched);

            ctx.assemble_document(&document.label, &candidates);
        }

        write_graph(&config.data_paths.kg, &ctx.nodes(), &ctx.edges())?;

        let report = BuildReport {
            documents_processed: outcome.documents.len(),
            documents_skipped: outcome.skipped,
            node_count: ctx.node_count(),
            edge_count: ctx.edge_count(),
            started_at,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Build complete: {} documents ({} skipped), {} nodes, {} edges, {}ms",
            report.documents_processed,
            report.documents_skipped,
            report.node_count,
            report.edge_count,
            report.duration_ms
        );

        Ok(report)
    }

    /// Stats over the files a previous build wrote.
    pub fn stats(config: &BuildConfig) -> Result<GraphStats> {
        let (nodes, edges) = biokg_graph::read_graph(&config.data_paths.kg)?;
        Ok(GraphStats::from_parts(&nodes, &edges))
    }
}
