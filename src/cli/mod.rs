//! Command-line driver for the `wgraph` binary.

pub mod commands;

use crate::graph::{Graph, GraphBuilder};
use crate::types::{GraphError, GraphResult, NodeId, DEFAULT_WEIGHT};

/// Parse a `U:V` or `U:V:W` edge specification.
pub fn parse_edge_spec(spec: &str) -> GraphResult<(NodeId, NodeId, f64)> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    let (u, v, w) = match parts.as_slice() {
        [u, v] => (*u, *v, None),
        [u, v, w] => (*u, *v, Some(*w)),
        _ => return Err(GraphError::InvalidEdgeSpec(spec.to_string())),
    };

    let parse_id = |s: &str| {
        s.parse::<NodeId>()
            .map_err(|_| GraphError::InvalidEdgeSpec(spec.to_string()))
    };
    let weight = match w {
        Some(w) => {
            let weight: f64 = w
                .parse()
                .map_err(|_| GraphError::InvalidWeight(w.to_string()))?;
            if weight.is_nan() {
                return Err(GraphError::InvalidWeight(w.to_string()));
            }
            weight
        }
        None => DEFAULT_WEIGHT,
    };
    Ok((parse_id(u)?, parse_id(v)?, weight))
}

/// Build a graph from `--node` IDs followed by `--edge` specs.
pub fn graph_from_specs(nodes: &[NodeId], edges: &[String]) -> GraphResult<Graph> {
    let mut builder = GraphBuilder::new();
    for &id in nodes {
        builder.node(id);
    }
    for spec in edges {
        let (u, v, w) = parse_edge_spec(spec)?;
        builder.edge(u, v, w);
    }
    Ok(builder.build())
}

/// The demonstration graph: four nodes, five edges, attributes on node 0.
pub fn demo_graph() -> Graph {
    GraphBuilder::new()
        .node_with(0, [("x", 100), ("y", 200)])
        .node(1)
        .node(2)
        .edge(0, 1, 0.5)
        .edge(1, 2, 1.0)
        .edge(0, 2, 2.0)
        .edge(0, 3, 0.3)
        .edge(1, 3, 0.3)
        .build()
}
