//! CLI command implementations.

use crate::graph::{shortest_simple_path, Graph, PathParams};
use crate::types::{GraphResult, NodeId};

use super::demo_graph;

fn print_json(value: &serde_json::Value) -> GraphResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Run the built-in demonstration: edge check, neighbors, shortest path.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let graph = demo_graph();
    let has_edge = graph.has_edge(0, 1);
    let neighbors = graph.get_neighbors(0)?;
    let result = graph.shortest_path(0, 2)?;

    if json {
        print_json(&serde_json::json!({
            "has_edge_0_1": has_edge,
            "neighbors_of_0": neighbors,
            "shortest_path_0_2": result,
        }))?;
    } else {
        println!("Has edge(0, 1): {}", has_edge);
        println!(
            "The neighbors of node 0: {}",
            neighbors
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        println!("The shortest distance from node 0 to node 2: {}", result.cost);
        println!(
            "The shortest path from node 0 to node 2: {}",
            format_path(&result.path)
        );
    }
    Ok(())
}

/// Summarize a graph: node and edge counts, per-node out-degree.
pub fn cmd_info(graph: &Graph, json: bool) -> GraphResult<()> {
    if json {
        let nodes: Vec<serde_json::Value> = graph
            .nodes()
            .map(|node| {
                serde_json::json!({
                    "id": node.id(),
                    "out_degree": node.out_degree(),
                    "attributes": node.attributes(),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "node_list": nodes,
        }))?;
    } else {
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        for node in graph.nodes() {
            println!("  Node {}: out-degree {}", node.id(), node.out_degree());
            for (name, value) in node.attributes() {
                println!("    {} = {} ({})", name, value, value.type_name());
            }
        }
    }
    Ok(())
}

/// List the neighbors of a node along with the connecting edge weights.
pub fn cmd_neighbors(graph: &Graph, node_id: NodeId, json: bool) -> GraphResult<()> {
    let neighbors = graph.get_neighbors(node_id)?;

    if json {
        let list: Vec<serde_json::Value> = neighbors
            .iter()
            .map(|&id| {
                serde_json::json!({
                    "id": id,
                    "weight": graph.edge_weight(node_id, id),
                })
            })
            .collect();
        print_json(&serde_json::json!({ "node": node_id, "neighbors": list }))?;
    } else if neighbors.is_empty() {
        println!("Node {} has no neighbors.", node_id);
    } else {
        println!("Neighbors of node {}:", node_id);
        for &id in &neighbors {
            match graph.edge_weight(node_id, id) {
                Some(w) => println!("  {} (weight {})", id, w),
                None => println!("  {}", id),
            }
        }
    }
    Ok(())
}

/// Find the shortest simple path between two nodes.
pub fn cmd_path(graph: &Graph, params: PathParams, json: bool) -> GraphResult<()> {
    let result = shortest_simple_path(graph, &params)?;

    if json {
        print_json(&serde_json::json!({
            "source": params.source,
            "target": params.target,
            "reachable": result.is_reachable(),
            "cost": result.cost,
            "path": result.path,
        }))?;
    } else if result.is_reachable() {
        println!(
            "Shortest path {} -> {}: cost {} ({} hops)",
            params.source,
            params.target,
            result.cost,
            result.hops()
        );
        println!("  {}", format_path(&result.path));
    } else {
        println!(
            "No simple path from node {} to node {}.",
            params.source, params.target
        );
    }
    Ok(())
}
