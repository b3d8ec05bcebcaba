//! The directed, weighted edge record.

use serde::Serialize;

use super::{Attributes, NodeId};

/// Handle to an edge stored in a [`Graph`](crate::graph::Graph).
///
/// Handles stay valid for the lifetime of the graph: edges are never
/// removed and overwriting an edge updates it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in the graph's edge arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A directed connection `source -> target`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    /// Cost of traversing the edge. May be negative.
    pub weight: f64,
    /// Caller-defined attributes, never inspected by the graph.
    pub attributes: Attributes,
}

impl Edge {
    /// Create an edge with no attributes.
    pub(crate) fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
            attributes: Attributes::new(),
        }
    }

    /// Create an edge carrying the given attributes.
    pub(crate) fn with_attributes(
        source: NodeId,
        target: NodeId,
        weight: f64,
        attributes: Attributes,
    ) -> Self {
        Self {
            source,
            target,
            weight,
            attributes,
        }
    }

    /// Source node ID.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Target node ID.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// True when source and target are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
