//! Graph assembly: candidate sets in, deduplicated nodes and typed edges out.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use biokg_extract::{normalize_label, CandidateSet};

use crate::types::{GraphEdge, GraphNode, GraphStats, NodeType, Relation};

/// Mutable state of one graph build.
///
/// Owns the node dedup index and the edge list for the duration of a run;
/// there is exactly one writer. Node ids are assigned per type in
/// first-seen order, so a fixed document iteration order gives
/// reproducible ids.
pub struct BuildContext {
    graph: DiGraph<GraphNode, Relation>,
    /// (type, normalized label) → node, enforcing node uniqueness.
    node_index: HashMap<(NodeType, String), NodeIndex>,
    /// Next id ordinal per node type.
    counters: HashMap<NodeType, usize>,
    max_label_chars: usize,
}

impl BuildContext {
    pub fn new(max_label_chars: usize) -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
            counters: HashMap::new(),
            max_label_chars,
        }
    }

    /// Create a node, or reuse the existing one with the same
    /// (type, normalized label).
    pub fn add_node(&mut self, node_type: NodeType, label: &str) -> NodeIndex {
        let label = normalize_label(label, self.max_label_chars);
        if let Some(&idx) = self.node_index.get(&(node_type, label.clone())) {
            return idx;
        }
        let ordinal = self.counters.entry(node_type).or_insert(0);
        *ordinal += 1;
        let id = format!("{}_{}", node_type.slug(), ordinal);
        let idx = self.graph.add_node(GraphNode {
            id,
            node_type,
            label: label.clone(),
        });
        self.node_index.insert((node_type, label), idx);
        idx
    }

    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, relation: Relation) {
        self.graph.add_edge(source, target, relation);
    }

    /// Insert one document and its merged candidate sets into the graph.
    ///
    /// Creates the Article node, DESCRIBES edges to experiments, FUNDS
    /// edges from projects, and the INVOLVES/OBSERVES cross-products
    /// between this document's experiments and its biological systems and
    /// effects. Biological-system and effect nodes attach only through
    /// experiments, never to the article directly.
    pub fn assemble_document(&mut self, article_label: &str, candidates: &CandidateSet) {
        let article = self.add_node(NodeType::Article, article_label);

        let mut experiments = Vec::new();
        for term in &candidates.experiments {
            let experiment = self.add_node(NodeType::Experiment, term);
            self.add_edge(article, experiment, Relation::Describes);
            experiments.push(experiment);
        }

        let bio_systems: Vec<NodeIndex> = candidates
            .bio_systems
            .iter()
            .map(|term| self.add_node(NodeType::BiologicalSystem, term))
            .collect();

        let effects: Vec<NodeIndex> = candidates
            .effects
            .iter()
            .map(|term| self.add_node(NodeType::Effect, term))
            .collect();

        for term in &candidates.projects {
            let project = self.add_node(NodeType::Project, term);
            self.add_edge(project, article, Relation::Funds);
        }

        // Coarse co-occurrence linking: full cross-product within this
        // document's candidate sets.
        for &experiment in &experiments {
            for &bio in &bio_systems {
                self.add_edge(experiment, bio, Relation::Involves);
            }
            for &effect in &effects {
                self.add_edge(experiment, effect, Relation::Observes);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> Vec<GraphNode> {
        self.graph.node_weights().cloned().collect()
    }

    /// Edges in creation order, with endpoint node ids resolved.
    pub fn edges(&self) -> Vec<GraphEdge> {
        self.graph
            .edge_references()
            .map(|edge| GraphEdge {
                source: self.graph[edge.source()].id.clone(),
                target: self.graph[edge.target()].id.clone(),
                relation: *edge.weight(),
            })
            .collect()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats::from_parts(&self.nodes(), &self.edges())
    }
}
