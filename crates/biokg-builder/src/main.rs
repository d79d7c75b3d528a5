//! biokg — batch knowledge-graph builder for space-biology publications.
//!
//! Reads parsed publication JSON files, extracts typed entity candidates
//! (heuristics plus optional NER), and writes the deduplicated node/edge
//! graph as `nodes.json` and `edges.json` for read-only consumers.

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

mod pipeline;

use pipeline::BuildPipeline;

fn resolve_data_dir() -> PathBuf {
    std::env::var("BIOKG_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("--build" | "build") => {
            let data_dir = args.get(2).map(PathBuf::from).unwrap_or_else(resolve_data_dir);
            build(&data_dir)
        }
        Some("--stats" | "stats") => {
            let data_dir = args.get(2).map(PathBuf::from).unwrap_or_else(resolve_data_dir);
            stats(&data_dir)
        }
        Some("--help" | "-h" | "help") => {
            println!("biokg — space-biology knowledge-graph builder");
            println!();
            println!("Usage: biokg [command] [data-dir]");
            println!();
            println!("Commands:");
            println!("  (none) | build [data-dir]   Rebuild the graph from parsed JSON files");
            println!("  stats [data-dir]            Print stats for the last built graph");
            println!("  help                        Show this help message");
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}. Use 'biokg help' for usage.", other);
            std::process::exit(1);
        }
    }
}

fn build(data_dir: &Path) -> anyhow::Result<()> {
    info!("Data directory: {}", data_dir.display());

    let config = biokg_core::BuildConfig::from_env(data_dir)?;

    // Load the enrichment model once, up front, outside the document loop.
    let ner = biokg_ner::create_ner(&config.data_paths.models);

    let report = BuildPipeline::run(&config, ner.as_ref())
        .map_err(|e| anyhow::anyhow!("Build failed: {}", e))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn stats(data_dir: &Path) -> anyhow::Result<()> {
    let config = biokg_core::BuildConfig::from_env(data_dir)?;
    let stats = BuildPipeline::stats(&config)
        .map_err(|e| anyhow::anyhow!("No readable graph in {}: {}", config.data_paths.kg.display(), e))?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
