//! JSON persistence of the node and edge lists.
//!
//! A build replaces `nodes.json` and `edges.json` wholesale. There is no
//! cross-file transaction; both payloads are serialized before either file
//! is touched, and a failed second write is logged so a stale pairing is
//! never silent.

use std::path::Path;

use tracing::{info, warn};

use biokg_core::{Error, Result};

use crate::types::{GraphEdge, GraphNode};

/// Write `nodes.json` and `edges.json` into `kg_dir`.
pub fn write_graph(kg_dir: &Path, nodes: &[GraphNode], edges: &[GraphEdge]) -> Result<()> {
    let nodes_path = kg_dir.join("nodes.json");
    let edges_path = kg_dir.join("edges.json");

    // Serialize both payloads up front so an encoding failure cannot
    // leave one file replaced and the other stale.
    let nodes_json = serde_json::to_vec_pretty(nodes)
        .map_err(|e| Error::GraphWrite(format!("encoding nodes: {}", e)))?;
    let edges_json = serde_json::to_vec_pretty(edges)
        .map_err(|e| Error::GraphWrite(format!("encoding edges: {}", e)))?;

    std::fs::write(&nodes_path, nodes_json)
        .map_err(|e| Error::GraphWrite(format!("{}: {}", nodes_path.display(), e)))?;

    if let Err(e) = std::fs::write(&edges_path, edges_json) {
        warn!(
            "{} was already replaced but the edge write failed; graph files are inconsistent",
            nodes_path.display()
        );
        return Err(Error::GraphWrite(format!("{}: {}", edges_path.display(), e)));
    }

    info!("Saved nodes: {} ({})", nodes_path.display(), nodes.len());
    info!("Saved edges: {} ({})", edges_path.display(), edges.len());
    Ok(())
}

/// Read a previously written graph back from `kg_dir`.
///
/// Both files must exist and contain JSON arrays of the expected shape.
pub fn read_graph(kg_dir: &Path) -> Result<(Vec<GraphNode>, Vec<GraphEdge>)> {
    let nodes_raw = std::fs::read_to_string(kg_dir.join("nodes.json"))?;
    let nodes: Vec<GraphNode> = serde_json::from_str(&nodes_raw)?;

    let edges_raw = std::fs::read_to_string(kg_dir.join("edges.json"))?;
    let edges: Vec<GraphEdge> = serde_json::from_str(&edges_raw)?;

    Ok((nodes, edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeType, Relation};

    fn sample() -> (Vec<GraphNode>, Vec<GraphEdge>) {
        let nodes = vec![
            GraphNode {
                id: "article_1".into(),
                node_type: NodeType::Article,
                label: "Bone Loss in Mice".into(),
            },
            GraphNode {
                id: "experiment_1".into(),
                node_type: NodeType::Experiment,
                label: "experiment".into(),
            },
        ];
        let edges = vec![GraphEdge {
            source: "article_1".into(),
            target: "experiment_1".into(),
            relation: Relation::Describes,
        }];
        (nodes, edges)
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let (nodes, edges) = sample();
        write_graph(dir.path(), &nodes, &edges).unwrap();

        let (read_nodes, read_edges) = read_graph(dir.path()).unwrap();
        assert_eq!(read_nodes, nodes);
        assert_eq!(read_edges, edges);
    }

    #[test]
    fn test_write_replaces_previous_build() {
        let dir = tempfile::tempdir().unwrap();
        let (nodes, edges) = sample();
        write_graph(dir.path(), &nodes, &edges).unwrap();
        write_graph(dir.path(), &nodes[..1], &[]).unwrap();

        let (read_nodes, read_edges) = read_graph(dir.path()).unwrap();
        assert_eq!(read_nodes.len(), 1);
        assert!(read_edges.is_empty());
    }

    #[test]
    fn test_write_is_deterministic() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let (nodes, edges) = sample();
        write_graph(dir_a.path(), &nodes, &edges).unwrap();
        write_graph(dir_b.path(), &nodes, &edges).unwrap();

        let bytes_a = std::fs::read(dir_a.path().join("nodes.json")).unwrap();
        let bytes_b = std::fs::read(dir_b.path().join("nodes.json")).unwrap();
        assert_eq!(bytes_a, bytes_b);
    }

    #[test]
    fn test_read_missing_files_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_graph(dir.path()).is_err());
    }

    #[test]
    fn test_read_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("nodes.json"), r#"{"id": "x"}"#).unwrap();
        std::fs::write(dir.path().join("edges.json"), "[]").unwrap();
        assert!(read_graph(dir.path()).is_err());
    }

    #[test]
    fn test_unwritable_directory_is_graph_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let (nodes, edges) = sample();
        let err = write_graph(&missing, &nodes, &edges).unwrap_err();
        assert!(matches!(err, Error::GraphWrite(_)));
    }
}
