//! Shortest simple path search (exhaustive depth-first backtracking).

use std::collections::{btree_map, HashSet};

use serde::Serialize;

use crate::types::{EdgeId, GraphError, GraphResult, NodeId};

use super::Graph;

/// What the search does when an outgoing edge leads to a node that is
/// already on the path under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockedEdge {
    /// Give up on the whole current node: it reports no path, even if
    /// other outgoing edges were already explored successfully.
    #[default]
    Abort,
    /// Ignore that one edge and keep exploring the node's other edges.
    Skip,
}

/// Parameters for a shortest path query.
#[derive(Debug, Clone, Copy)]
pub struct PathParams {
    /// Starting node ID.
    pub source: NodeId,
    /// Destination node ID.
    pub target: NodeId,
    /// Handling of edges into already-used nodes.
    pub on_blocked: BlockedEdge,
}

impl PathParams {
    /// Parameters with the default [`BlockedEdge::Abort`] policy.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            on_blocked: BlockedEdge::default(),
        }
    }

    pub fn on_blocked(mut self, policy: BlockedEdge) -> Self {
        self.on_blocked = policy;
        self
    }
}

/// Result of a shortest path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Total edge weight. `f64::INFINITY` when unreachable.
    pub cost: f64,
    /// Node IDs from source to target inclusive. Empty when unreachable.
    pub path: Vec<NodeId>,
}

impl PathResult {
    /// The "no simple path" result.
    pub fn unreachable() -> Self {
        Self {
            cost: f64::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Compute the minimum-weight simple path between two existing nodes.
///
/// Every simple path is enumerated, so negative weights are handled, at
/// exponential worst-case cost. Ties go to the neighbor with the smallest
/// ID, because outgoing edges are visited in ascending target order and
/// only a strictly smaller cost replaces the current best.
///
/// `source == target` yields the zero-length path `[source]`.
pub fn shortest_simple_path(graph: &Graph, params: &PathParams) -> GraphResult<PathResult> {
    for id in [params.source, params.target] {
        if !graph.has_node(id) {
            return Err(GraphError::NodeNotFound(id));
        }
    }

    if params.source == params.target {
        return Ok(PathResult {
            cost: 0.0,
            path: vec![params.source],
        });
    }

    let mut search = Search {
        graph,
        target: params.target,
        on_blocked: params.on_blocked,
        remaining: graph.node_ids().filter(|&n| n != params.source).collect(),
        edges_explored: 0,
    };
    let (cost, mut reversed) = search.explore(params.source);

    let result = if reversed.is_empty() {
        PathResult::unreachable()
    } else {
        reversed.push(params.source);
        reversed.reverse();
        PathResult {
            cost,
            path: reversed,
        }
    };

    log::debug!(
        "Shortest path {} -> {}: cost {}, {} hops, {} edges explored",
        params.source,
        params.target,
        result.cost,
        result.hops(),
        search.edges_explored
    );
    Ok(result)
}

/// Backtracking state for one query.
struct Search<'a> {
    graph: &'a Graph,
    target: NodeId,
    on_blocked: BlockedEdge,
    /// Nodes not yet on the path under construction.
    remaining: HashSet<NodeId>,
    edges_explored: usize,
}

/// One node on the path under construction.
struct Frame<'a> {
    /// Outgoing edges not visited yet, ascending by target.
    edges: Option<btree_map::Iter<'a, NodeId, EdgeId>>,
    /// Child being explored below this frame, with the connecting weight.
    pending: Option<(NodeId, f64)>,
    best_cost: f64,
    /// Best path after this node, target first.
    best_path: Vec<NodeId>,
}

impl<'a> Frame<'a> {
    fn new(graph: &'a Graph, id: NodeId) -> Self {
        Self {
            edges: graph.node(id).map(|node| node.adjacency().iter()),
            pending: None,
            best_cost: f64::INFINITY,
            best_path: Vec::new(),
        }
    }

    /// Keep `next` if reaching the target through it is strictly cheaper.
    fn offer(&mut self, next: NodeId, weight: f64, sub_cost: f64, mut sub_path: Vec<NodeId>) {
        let total = sub_cost + weight;
        if total < self.best_cost {
            sub_path.push(next);
            self.best_cost = total;
            self.best_path = sub_path;
        }
    }
}

impl Search<'_> {
    /// Best cost from `source` to the target, with the path after `source`
    /// in reverse order (target first). Empty path = no path.
    ///
    /// Depth-first over an explicit stack, so path length is bounded by
    /// heap rather than thread stack.
    fn explore(&mut self, source: NodeId) -> (f64, Vec<NodeId>) {
        let graph = self.graph;
        let mut stack = vec![Frame::new(graph, source)];
        let mut returned: Option<(f64, Vec<NodeId>)> = None;

        while let Some(frame) = stack.last_mut() {
            if let Some((child, weight)) = frame.pending.take() {
                self.remaining.insert(child);
                if let Some((sub_cost, sub_path)) = returned.take() {
                    if !sub_path.is_empty() {
                        frame.offer(child, weight, sub_cost, sub_path);
                    }
                }
            }

            let mut descend = None;
            let mut aborted = false;
            while let Some((&next, &edge_id)) = frame.edges.as_mut().and_then(|it| it.next()) {
                if !self.remaining.contains(&next) {
                    match self.on_blocked {
                        BlockedEdge::Abort => {
                            log::trace!("Edge into {} blocked, abandoning node", next);
                            aborted = true;
                            break;
                        }
                        BlockedEdge::Skip => {
                            log::trace!("Edge into {} blocked, skipping", next);
                            continue;
                        }
                    }
                }

                let Some(edge) = graph.edge(edge_id) else {
                    continue;
                };
                self.edges_explored += 1;
                log::trace!(
                    "Exploring {} -> {} (weight {})",
                    edge.source(),
                    next,
                    edge.weight
                );

                if next == self.target {
                    frame.offer(next, edge.weight, 0.0, Vec::new());
                    continue;
                }
                self.remaining.remove(&next);
                frame.pending = Some((next, edge.weight));
                descend = Some(next);
                break;
            }

            if let Some(next) = descend {
                stack.push(Frame::new(graph, next));
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            let result = if aborted {
                (f64::INFINITY, Vec::new())
            } else {
                (done.best_cost, done.best_path)
            };
            if stack.is_empty() {
                return result;
            }
            returned = Some(result);
        }

        (f64::INFINITY, Vec::new())
    }
}
