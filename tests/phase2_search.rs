//! Phase 2 tests: shortest simple path search.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use weighted_graph::graph::{shortest_simple_path, BlockedEdge, Graph, GraphBuilder, PathParams};
use weighted_graph::types::{GraphError, NodeId};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn skip_params(source: NodeId, target: NodeId) -> PathParams {
    PathParams::new(source, target).on_blocked(BlockedEdge::Skip)
}

/// Exhaustive minimum over all simple paths, for cross-checking.
fn brute_force_min(graph: &Graph, source: NodeId, target: NodeId) -> f64 {
    fn walk(
        graph: &Graph,
        current: NodeId,
        target: NodeId,
        visited: &mut Vec<NodeId>,
        cost: f64,
        best: &mut f64,
    ) {
        if current == target {
            if cost < *best {
                *best = cost;
            }
            return;
        }
        for (next, edge) in graph.edges_from(current).unwrap() {
            if visited.contains(&next) {
                continue;
            }
            visited.push(next);
            walk(graph, next, target, visited, cost + edge.weight, best);
            visited.pop();
        }
    }

    let mut best = f64::INFINITY;
    walk(graph, source, target, &mut vec![source], 0.0, &mut best);
    best
}

/// Plain recursive formulation of the Abort search over a `rem_nodes`
/// list: a node is abandoned on its first edge into a used node.
fn list_based_search(
    graph: &Graph,
    current: NodeId,
    target: NodeId,
    rem_nodes: &mut Vec<NodeId>,
) -> (f64, Vec<NodeId>) {
    let mut min_weight = f64::INFINITY;
    let mut next_node = None;
    let mut paths: HashMap<NodeId, Vec<NodeId>> = HashMap::new();

    for (next, edge) in graph.edges_from(current).unwrap() {
        if !rem_nodes.contains(&next) {
            return (f64::INFINITY, Vec::new());
        }
        rem_nodes.retain(|&n| n != next);
        let (mut sum, path) = if next != target {
            list_based_search(graph, next, target, rem_nodes)
        } else {
            (0.0, Vec::new())
        };
        paths.insert(next, path);
        sum += edge.weight;
        if sum < min_weight {
            min_weight = sum;
            next_node = Some(next);
        }
        rem_nodes.push(next);
    }

    let mut path = next_node
        .and_then(|id| paths.remove(&id))
        .unwrap_or_default();
    if min_weight != f64::INFINITY {
        if let Some(id) = next_node {
            path.insert(0, id);
        }
    }
    (min_weight, path)
}

fn random_graph(rng: &mut StdRng) -> (Graph, NodeId) {
    let node_count: NodeId = rng.gen_range(2..7);
    let mut graph = Graph::new();
    for id in 0..node_count {
        graph.add_node(id);
    }
    for u in 0..node_count {
        for v in 0..node_count {
            if rng.gen_bool(0.4) {
                let weight = rng.gen_range(-3..10) as f64;
                graph.add_weighted_edge(u, v, weight);
            }
        }
    }
    (graph, node_count)
}

fn assert_valid_path(graph: &Graph, path: &[NodeId], cost: f64) {
    let mut seen = std::collections::HashSet::new();
    for id in path {
        assert!(seen.insert(*id), "node {} repeated in {:?}", id, path);
    }
    let total: f64 = path
        .windows(2)
        .map(|w| graph.edge_weight(w[0], w[1]).expect("path uses missing edge"))
        .sum();
    assert!((total - cost).abs() < 1e-9, "path {:?} sums to {}, reported {}", path, total, cost);
}

// ==================== Basic Paths ====================

#[test]
fn test_single_edge_path() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 1.0);

    let result = graph.shortest_path(0, 1).unwrap();
    assert!((result.cost - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.path, vec![0, 1]);
    assert_eq!(result.hops(), 1);
    assert!(result.is_reachable());
}

#[test]
fn test_indirect_path_beats_direct_edge() {
    init_logger();
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 0.5);
    graph.add_weighted_edge(1, 2, 1.0);
    graph.add_weighted_edge(0, 2, 2.0);

    let result = graph.shortest_path(0, 2).unwrap();
    assert!((result.cost - 1.5).abs() < f64::EPSILON);
    assert_eq!(result.path, vec![0, 1, 2]);
}

#[test]
fn test_demo_graph_path() {
    let graph = GraphBuilder::new()
        .node_with(0, [("x", 100), ("y", 200)])
        .node(1)
        .node(2)
        .edge(0, 1, 0.5)
        .edge(1, 2, 1.0)
        .edge(0, 2, 2.0)
        .edge(0, 3, 0.3)
        .edge(1, 3, 0.3)
        .build();

    let result = graph.shortest_path(0, 2).unwrap();
    assert!((result.cost - 1.5).abs() < f64::EPSILON);
    assert_eq!(result.path, vec![0, 1, 2]);
}

#[test]
fn test_unreachable_target() {
    let mut graph = Graph::new();
    graph.add_edge(0, 1);
    graph.add_edge(2, 3);

    let result = graph.shortest_path(0, 3).unwrap();
    assert!(result.cost.is_infinite());
    assert!(result.cost > 0.0);
    assert!(result.path.is_empty());
    assert!(!result.is_reachable());
    assert_eq!(result.hops(), 0);
}

#[test]
fn test_path_against_edge_direction() {
    let mut graph = Graph::new();
    graph.add_edge(0, 1);

    let result = graph.shortest_path(1, 0).unwrap();
    assert!(result.cost.is_infinite());
    assert!(result.path.is_empty());
}

#[test]
fn test_isolated_source() {
    let mut graph = Graph::new();
    graph.add_node(0);
    graph.add_node(1);

    let result = graph.shortest_path(0, 1).unwrap();
    assert!(!result.is_reachable());
}

#[test]
fn test_source_equals_target() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 2.0);
    graph.add_weighted_edge(1, 0, 2.0);

    let result = graph.shortest_path(0, 0).unwrap();
    assert_eq!(result.cost, 0.0);
    assert_eq!(result.path, vec![0]);
}

#[test]
fn test_unknown_endpoints() {
    let mut graph = Graph::new();
    graph.add_edge(0, 1);

    match graph.shortest_path(7, 1) {
        Err(GraphError::NodeNotFound(7)) => {}
        other => panic!("Expected NodeNotFound(7), got {:?}", other),
    }
    match graph.shortest_path(0, 8) {
        Err(GraphError::NodeNotFound(8)) => {}
        other => panic!("Expected NodeNotFound(8), got {:?}", other),
    }
}

#[test]
fn test_negative_weights() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 5.0);
    graph.add_weighted_edge(1, 2, -4.0);
    graph.add_weighted_edge(0, 2, 2.0);

    let result = graph.shortest_path(0, 2).unwrap();
    assert!((result.cost - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.path, vec![0, 1, 2]);
}

#[test]
fn test_longer_chain_preferred_when_cheaper() {
    let mut graph = Graph::new();
    for i in 0..5 {
        graph.add_weighted_edge(i, i + 1, 1.0);
    }
    graph.add_weighted_edge(0, 5, 10.0);

    let result = graph.shortest_path(0, 5).unwrap();
    assert!((result.cost - 5.0).abs() < f64::EPSILON);
    assert_eq!(result.path, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_path_stops_at_target() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 1.0);
    graph.add_weighted_edge(1, 2, -10.0);

    let result = graph.shortest_path(0, 1).unwrap();
    assert_eq!(result.path, vec![0, 1]);
    assert!((result.cost - 1.0).abs() < f64::EPSILON);
}

// ==================== Tie-break ====================

#[test]
fn test_tie_goes_to_lowest_neighbor_id() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 2, 1.0);
    graph.add_weighted_edge(0, 1, 1.0);
    graph.add_weighted_edge(2, 3, 1.0);
    graph.add_weighted_edge(1, 3, 1.0);

    let result = graph.shortest_path(0, 3).unwrap();
    assert!((result.cost - 2.0).abs() < f64::EPSILON);
    assert_eq!(result.path, vec![0, 1, 3]);
}

#[test]
fn test_tie_between_direct_and_indirect() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 1.0);
    graph.add_weighted_edge(1, 2, 1.0);
    graph.add_weighted_edge(0, 2, 2.0);

    // Neighbor 1 is visited before neighbor 2 and keeps the tie.
    let result = graph.shortest_path(0, 2).unwrap();
    assert_eq!(result.path, vec![0, 1, 2]);
}

// ==================== Blocked Edge Policy ====================

#[test]
fn test_abort_on_back_edge() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 1.0);
    graph.add_weighted_edge(1, 0, 1.0);
    graph.add_weighted_edge(1, 2, 1.0);

    // Node 1's edge back to 0 is visited first and abandons node 1.
    let result = graph.shortest_path(0, 2).unwrap();
    assert!(!result.is_reachable());
    assert!(result.cost.is_infinite());

    let result = shortest_simple_path(&graph, &skip_params(0, 2)).unwrap();
    assert!((result.cost - 2.0).abs() < f64::EPSILON);
    assert_eq!(result.path, vec![0, 1, 2]);
}

#[test]
fn test_abort_on_source_self_loop() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 0, 1.0);
    graph.add_weighted_edge(0, 1, 1.0);

    let result = graph.shortest_path(0, 1).unwrap();
    assert!(!result.is_reachable());

    let result = shortest_simple_path(&graph, &skip_params(0, 1)).unwrap();
    assert_eq!(result.path, vec![0, 1]);
}

#[test]
fn test_abort_discards_already_explored_edges() {
    let mut graph = Graph::new();
    // Node 1 reaches the target through 2 before hitting the blocked 1 -> 3.
    graph.add_weighted_edge(0, 3, 1.0);
    graph.add_weighted_edge(3, 1, 1.0);
    graph.add_weighted_edge(1, 2, 1.0);
    graph.add_weighted_edge(1, 3, 1.0);
    graph.add_weighted_edge(2, 4, 1.0);

    let abort = graph.shortest_path(0, 4).unwrap();
    assert!(!abort.is_reachable());

    let skip = shortest_simple_path(&graph, &skip_params(0, 4)).unwrap();
    assert_eq!(skip.path, vec![0, 3, 1, 2, 4]);
    assert!((skip.cost - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_default_policy_is_abort() {
    let params = PathParams::new(1, 2);
    assert_eq!(params.on_blocked, BlockedEdge::Abort);
    assert_eq!(BlockedEdge::default(), BlockedEdge::Abort);
}

#[test]
fn test_policies_agree_on_acyclic_graph() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 2.0);
    graph.add_weighted_edge(0, 2, 1.0);
    graph.add_weighted_edge(1, 3, 1.0);
    graph.add_weighted_edge(2, 3, 3.0);
    graph.add_weighted_edge(2, 1, 0.5);

    let abort = shortest_simple_path(&graph, &PathParams::new(0, 3)).unwrap();
    let skip = shortest_simple_path(&graph, &skip_params(0, 3)).unwrap();
    assert_eq!(abort, skip);
    assert!((abort.cost - 2.5).abs() < f64::EPSILON);
    assert_eq!(abort.path, vec![0, 2, 1, 3]);
}

// ==================== Determinism ====================

#[test]
fn test_repeated_queries_identical() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 0.5);
    graph.add_weighted_edge(1, 2, 1.0);
    graph.add_weighted_edge(0, 2, 2.0);
    graph.add_weighted_edge(2, 3, 0.25);
    graph.add_weighted_edge(1, 3, 3.0);

    let first = graph.shortest_path(0, 3).unwrap();
    let second = graph.shortest_path(0, 3).unwrap();
    assert_eq!(first, second);

    let unreachable_first = graph.shortest_path(3, 0).unwrap();
    let unreachable_second = graph.shortest_path(3, 0).unwrap();
    assert_eq!(unreachable_first.path, unreachable_second.path);
    assert!(unreachable_second.cost.is_infinite());
}

#[test]
fn test_search_sees_weight_updates() {
    let mut graph = Graph::new();
    graph.add_weighted_edge(0, 1, 0.5);
    graph.add_weighted_edge(1, 2, 1.0);
    graph.add_weighted_edge(0, 2, 2.0);
    assert_eq!(graph.shortest_path(0, 2).unwrap().path, vec![0, 1, 2]);

    graph.add_weighted_edge(0, 2, 1.0);
    let result = graph.shortest_path(0, 2).unwrap();
    assert_eq!(result.path, vec![0, 2]);
    assert!((result.cost - 1.0).abs() < f64::EPSILON);
}

// ==================== Cross-check ====================

#[test]
fn test_skip_policy_matches_brute_force() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..40 {
        let (graph, node_count) = random_graph(&mut rng);

        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        if source == target {
            continue;
        }

        let expected = brute_force_min(&graph, source, target);
        let skip = shortest_simple_path(&graph, &skip_params(source, target)).unwrap();
        let abort = graph.shortest_path(source, target).unwrap();

        if expected.is_infinite() {
            assert!(!skip.is_reachable());
            assert!(!abort.is_reachable());
            continue;
        }

        assert!((skip.cost - expected).abs() < 1e-9);
        assert_eq!(skip.path.first(), Some(&source));
        assert_eq!(skip.path.last(), Some(&target));
        assert_valid_path(&graph, &skip.path, skip.cost);

        if abort.is_reachable() {
            assert!(abort.cost >= expected - 1e-9);
            assert_valid_path(&graph, &abort.path, abort.cost);
        }
    }
}

#[test]
fn test_abort_policy_matches_list_based_search() {
    let mut rng = StdRng::seed_from_u64(0xab0e7);

    for _ in 0..500 {
        let (graph, node_count) = random_graph(&mut rng);
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        if source == target {
            continue;
        }

        let mut rem_nodes: Vec<NodeId> = graph.node_ids().filter(|&n| n != source).collect();
        let (expected_cost, mut expected_path) =
            list_based_search(&graph, source, target, &mut rem_nodes);
        let result = graph.shortest_path(source, target).unwrap();

        if expected_cost.is_infinite() {
            assert!(!result.is_reachable(), "expected no path in {:?}", graph);
            assert!(result.cost.is_infinite());
            continue;
        }

        expected_path.insert(0, source);
        assert_eq!(result.cost, expected_cost, "graph {:?}", graph);
        assert_eq!(result.path, expected_path, "graph {:?}", graph);
    }
}

// ==================== Long Paths ====================

#[test]
fn test_long_chain_does_not_exhaust_stack() {
    let length: NodeId = 100_000;
    let mut graph = Graph::new();
    for i in 0..length {
        graph.add_weighted_edge(i, i + 1, 1.0);
    }

    for policy in [BlockedEdge::Abort, BlockedEdge::Skip] {
        let params = PathParams::new(0, length).on_blocked(policy);
        let result = shortest_simple_path(&graph, &params).unwrap();
        assert_eq!(result.cost, length as f64);
        assert_eq!(result.hops(), length as usize);
        assert_eq!(result.path.first(), Some(&0));
        assert_eq!(result.path.last(), Some(&length));
        assert!(result.path.windows(2).all(|w| w[1] == w[0] + 1));
    }

    let back = graph.shortest_path(length, 0).unwrap();
    assert!(!back.is_reachable());
}

#[test]
fn test_long_chain_with_back_edge_aborts() {
    let length: NodeId = 50_000;
    let mut graph = Graph::new();
    for i in 0..length {
        graph.add_weighted_edge(i, i + 1, 1.0);
    }
    // Deep node with an edge back to the source, visited before its forward edge.
    graph.add_weighted_edge(length - 1, 0, 1.0);

    let abort = graph.shortest_path(0, length).unwrap();
    assert!(!abort.is_reachable());

    let skip = shortest_simple_path(&graph, &skip_params(0, length)).unwrap();
    assert_eq!(skip.hops(), length as usize);
    assert_eq!(skip.cost, length as f64);
}
