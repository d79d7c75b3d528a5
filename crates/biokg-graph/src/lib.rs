//! BioKG Graph — turns per-document candidate sets into the deduplicated
//! node/edge graph and persists it as two flat JSON files.

pub mod assembler;
pub mod store;
pub mod types;

pub use assembler::BuildContext;
pub use store::{read_graph, write_graph};
pub use types::{GraphEdge, GraphNode, GraphStats, NodeType, Relation};
