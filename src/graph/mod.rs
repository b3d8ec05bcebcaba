//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod search;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use search::{shortest_simple_path, BlockedEdge, PathParams, PathResult};
pub use weighted_graph::Graph;
