//! Node and edge types of the knowledge graph.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entity types a node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeType {
    Article,
    Experiment,
    Project,
    #[serde(rename = "Biological System")]
    BiologicalSystem,
    Effect,
}

impl NodeType {
    /// Stable id prefix for this type (`"biological_system"` etc.).
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Experiment => "experiment",
            Self::Project => "project",
            Self::BiologicalSystem => "biological_system",
            Self::Effect => "effect",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Article => write!(f, "Article"),
            Self::Experiment => write!(f, "Experiment"),
            Self::Project => write!(f, "Project"),
            Self::BiologicalSystem => write!(f, "Biological System"),
            Self::Effect => write!(f, "Effect"),
        }
    }
}

/// Edge relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Relation {
    /// Article → Experiment.
    Describes,
    /// Project → Article.
    Funds,
    /// Experiment → Biological System.
    Involves,
    /// Experiment → Effect.
    Observes,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Describes => write!(f, "DESCRIBES"),
            Self::Funds => write!(f, "FUNDS"),
            Self::Involves => write!(f, "INVOLVES"),
            Self::Observes => write!(f, "OBSERVES"),
        }
    }
}

/// A node in the knowledge graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
}

/// An edge in the knowledge graph. Edges are not deduplicated; repeated
/// relations between the same pair accumulate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub relation: Relation,
}

/// Summary statistics over a built or loaded graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub node_types: BTreeMap<String, usize>,
    pub edge_relations: BTreeMap<String, usize>,
}

impl GraphStats {
    /// Compute stats from flat node and edge lists.
    pub fn from_parts(nodes: &[GraphNode], edges: &[GraphEdge]) -> Self {
        let mut stats = Self {
            node_count: nodes.len(),
            edge_count: edges.len(),
            ..Self::default()
        };
        for node in nodes {
            *stats
                .node_types
                .entry(node.node_type.to_string())
                .or_insert(0) += 1;
        }
        for edge in edges {
            *stats
                .edge_relations
                .entry(edge.relation.to_string())
                .or_insert(0) += 1;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_wire_format() {
        let node = GraphNode {
            id: "biological_system_1".into(),
            node_type: NodeType::BiologicalSystem,
            label: "mice".into(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "Biological System");
        assert_eq!(json["id"], "biological_system_1");
    }

    #[test]
    fn test_relation_wire_format() {
        let edge = GraphEdge {
            source: "article_1".into(),
            target: "experiment_1".into(),
            relation: Relation::Describes,
        };
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["relation"], "DESCRIBES");
    }

    #[test]
    fn test_stats_breakdowns() {
        let nodes = vec![
            GraphNode {
                id: "article_1".into(),
                node_type: NodeType::Article,
                label: "A".into(),
            },
            GraphNode {
                id: "effect_1".into(),
                node_type: NodeType::Effect,
                label: "bone loss".into(),
            },
        ];
        let edges = vec![GraphEdge {
            source: "experiment_1".into(),
            target: "effect_1".into(),
            relation: Relation::Observes,
        }];
        let stats = GraphStats::from_parts(&nodes, &edges);
        assert_eq!(stats.node_count, 2);
        assert_eq!(stats.node_types["Article"], 1);
        assert_eq!(stats.edge_relations["OBSERVES"], 1);
    }
}
