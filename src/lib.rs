//! WeightedGraph — in-memory directed, weighted, attributed graphs.
//!
//! Nodes carry caller-supplied integer IDs and named attributes; edges are
//! directed and weighted, with at most one edge per ordered node pair. The
//! graph answers adjacency queries and finds minimum-weight simple paths.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{shortest_simple_path, BlockedEdge, Graph, GraphBuilder, PathParams, PathResult};
pub use types::{
    AttrValue, Attributes, Edge, EdgeId, GraphError, GraphResult, Node, NodeId, DEFAULT_WEIGHT,
};
