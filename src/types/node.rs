//! The node record and its outgoing adjacency.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Attributes, EdgeId, NodeId};

/// A vertex with caller-supplied ID, attributes and outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    id: NodeId,
    attributes: Attributes,
    /// Outgoing edges: target ID -> handle into the graph's edge arena.
    /// Ordered by target ID, which fixes the search's tie-break order.
    #[serde(skip_serializing)]
    adjacency: BTreeMap<NodeId, EdgeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, attributes: Attributes) -> Self {
        Self {
            id,
            attributes,
            adjacency: BTreeMap::new(),
        }
    }

    /// The node ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Target IDs of all outgoing edges, ascending. Includes `id()` if a
    /// self-loop exists.
    pub fn neighbor_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of outgoing edges, self-loop included.
    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Handle of the outgoing edge to `target`, if any.
    pub fn edge_to(&self, target: NodeId) -> Option<EdgeId> {
        self.adjacency.get(&target).copied()
    }

    pub(crate) fn adjacency(&self) -> &BTreeMap<NodeId, EdgeId> {
        &self.adjacency
    }

    pub(crate) fn link(&mut self, target: NodeId, edge: EdgeId) {
        self.adjacency.insert(target, edge);
    }

    pub(crate) fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }
}
