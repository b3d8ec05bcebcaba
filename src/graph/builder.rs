//! Fluent API for building Graph instances.

use crate::types::{AttrValue, Attributes, NodeId};

use super::Graph;

enum Step {
    Node(NodeId, Attributes),
    Edge(NodeId, NodeId, f64, Option<Attributes>),
}

/// Fluent builder for constructing a [`Graph`] from literals.
///
/// Calls are replayed in order by [`build`](Self::build), so the graph's
/// last-write-wins rules apply exactly as with direct mutation.
#[derive(Default)]
pub struct GraphBuilder {
    steps: Vec<Step>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no attributes.
    pub fn node(&mut self, id: NodeId) -> &mut Self {
        self.steps.push(Step::Node(id, Attributes::new()));
        self
    }

    /// Add a node with attributes given as `(name, value)` pairs.
    pub fn node_with<K, V, I>(&mut self, id: NodeId, attributes: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.steps.push(Step::Node(id, attributes));
        self
    }

    /// Add a weighted edge `u -> v`.
    pub fn edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> &mut Self {
        self.steps.push(Step::Edge(u, v, weight, None));
        self
    }

    /// Add a weighted edge `u -> v` carrying attributes.
    pub fn edge_with(
        &mut self,
        u: NodeId,
        v: NodeId,
        weight: f64,
        attributes: Attributes,
    ) -> &mut Self {
        self.steps.push(Step::Edge(u, v, weight, Some(attributes)));
        self
    }

    /// Build the final Graph.
    pub fn build(&mut self) -> Graph {
        let mut graph = Graph::new();
        for step in self.steps.drain(..) {
            match step {
                Step::Node(id, attributes) => graph.add_node_with_attributes(id, attributes),
                Step::Edge(u, v, weight, None) => {
                    graph.add_weighted_edge(u, v, weight);
                }
                Step::Edge(u, v, weight, Some(attributes)) => {
                    graph.add_edge_with_attributes(u, v, weight, attributes);
                }
            }
        }
        graph
    }
}
