//! Core graph structure — nodes, an edge arena and the (source, target) edge table.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::types::{
    Attributes, Edge, EdgeId, GraphError, GraphResult, Node, NodeId, DEFAULT_WEIGHT,
};

use super::search::{shortest_simple_path, PathParams, PathResult};

/// An in-memory directed, weighted, attributed graph.
///
/// At most one edge is kept per ordered `(source, target)` pair; adding the
/// same pair again overwrites it. Nodes and edges are never removed, so an
/// [`EdgeId`] handed out by this graph stays valid for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, indexed by ID.
    nodes: BTreeMap<NodeId, Node>,
    /// All edges, in insertion order. Node adjacency points into this arena.
    edges: Vec<Edge>,
    /// Edge table: (source_id, target_id) -> arena index.
    edge_index: HashMap<(NodeId, NodeId), EdgeId>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get a node by ID (immutable).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Get a node by ID (mutable). Only its attributes can be changed.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// All node IDs, ascending.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// All nodes, ascending by ID.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges, in the order they were first added.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Insert a node with no attributes.
    ///
    /// See [`add_node_with_attributes`](Self::add_node_with_attributes) for
    /// what happens when the ID already exists.
    pub fn add_node(&mut self, id: NodeId) {
        self.add_node_with_attributes(id, Attributes::new());
    }

    /// Insert a node carrying `attributes`.
    ///
    /// An existing node with the same ID has its attributes replaced
    /// wholesale (last write wins, no merge). Its outgoing edges are kept,
    /// since they are still present in the edge table.
    pub fn add_node_with_attributes(&mut self, id: NodeId, attributes: Attributes) {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                log::debug!("Replacing attributes of node {}", id);
                node.set_attributes(attributes);
            }
            None => {
                self.nodes.insert(id, Node::new(id, attributes));
            }
        }
    }

    /// Add an edge `u -> v` with the default weight of 1.0.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> EdgeId {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Add an edge `u -> v` with the given weight.
    ///
    /// Missing endpoints are created with empty attributes. If the edge
    /// already exists only its weight is overwritten; its attributes and
    /// handle are unchanged. Self-loops are stored like any other edge.
    pub fn add_weighted_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> EdgeId {
        self.upsert_edge(u, v, weight, None)
    }

    /// Add an edge `u -> v` with the given weight and attributes.
    ///
    /// Unlike [`add_weighted_edge`](Self::add_weighted_edge), an existing
    /// edge has its attributes replaced as well as its weight.
    pub fn add_edge_with_attributes(
        &mut self,
        u: NodeId,
        v: NodeId,
        weight: f64,
        attributes: Attributes,
    ) -> EdgeId {
        self.upsert_edge(u, v, weight, Some(attributes))
    }

    fn upsert_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        weight: f64,
        attributes: Option<Attributes>,
    ) -> EdgeId {
        self.nodes
            .entry(u)
            .or_insert_with(|| Node::new(u, Attributes::new()));
        self.nodes
            .entry(v)
            .or_insert_with(|| Node::new(v, Attributes::new()));

        if let Some(&id) = self.edge_index.get(&(u, v)) {
            let edge = &mut self.edges[id.0];
            log::debug!(
                "Overwriting edge {} -> {}: weight {} -> {}",
                u,
                v,
                edge.weight,
                weight
            );
            edge.weight = weight;
            if let Some(attributes) = attributes {
                edge.attributes = attributes;
            }
            return id;
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(match attributes {
            Some(attributes) => Edge::with_attributes(u, v, weight, attributes),
            None => Edge::new(u, v, weight),
        });
        self.edge_index.insert((u, v), id);
        if let Some(node) = self.nodes.get_mut(&u) {
            node.link(v, id);
        }
        id
    }

    /// True iff an edge `u -> v` exists. Unknown IDs yield `false`.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edge_index.contains_key(&(u, v))
    }

    /// Look up an edge by handle.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Look up an edge by handle (mutable). Endpoints cannot be changed.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id.0)
    }

    /// The edge `u -> v`, if present.
    pub fn edge_between(&self, u: NodeId, v: NodeId) -> Option<&Edge> {
        self.edge_index.get(&(u, v)).map(|id| &self.edges[id.0])
    }

    /// Weight of the edge `u -> v`, if present.
    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.edge_between(u, v).map(|e| e.weight)
    }

    /// All outgoing edges of `id` as `(target, edge)`, ascending by target.
    pub fn edges_from(&self, id: NodeId) -> GraphResult<Vec<(NodeId, &Edge)>> {
        let node = self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        Ok(node
            .adjacency()
            .iter()
            .map(|(&target, edge)| (target, &self.edges[edge.0]))
            .collect())
    }

    /// Distinct nodes one outgoing edge away from `id`, excluding `id`
    /// itself even when it has a self-loop.
    pub fn get_neighbors(&self, id: NodeId) -> GraphResult<BTreeSet<NodeId>> {
        let node = self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        Ok(node.neighbor_ids().filter(|&n| n != id).collect())
    }

    /// Minimum-weight simple path from `source` to `target`.
    ///
    /// Uses the default [`BlockedEdge::Abort`](super::BlockedEdge::Abort)
    /// policy; see [`shortest_simple_path`] for other policies.
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> GraphResult<PathResult> {
        shortest_simple_path(self, &PathParams::new(source, target))
    }
}
