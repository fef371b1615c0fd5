//! Cost-weighted shortest paths: Dijkstra and A*.
//!
//! Edge cost is `1 / weight`, so paths prefer chains of similar users. Both searches use a
//! binary min-heap with lazy deletion: improved entries are pushed again and stale ones are
//! skipped when popped.

use crate::result::{AlgorithmResult, Payload, StepEvent, Trace};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use socnet_graph::{Graph, Node, NodeId};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

pub const DIJKSTRA_NAME: &str = "Dijkstra Shortest Path";
pub const A_STAR_NAME: &str = "A* Shortest Path";

/// Scale applied to layout-space distance to form the A* heuristic.
pub const A_STAR_HEURISTIC_SCALE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathOutput {
    pub start: NodeId,
    pub end: NodeId,
    /// Empty when `end` is unreachable.
    pub path: Vec<NodeId>,
    pub path_edges: Vec<(NodeId, NodeId)>,
    /// `None` when `end` is unreachable.
    pub total_cost: Option<f64>,
    /// Finite tentative distances (g-scores for A*) in node order. Unreached nodes are absent.
    pub distances: IndexMap<NodeId, f64>,
    /// Nodes popped and expanded, the target included when reached.
    pub nodes_explored: usize,
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest `(priority, g, node)` first.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    priority: f64,
    g: f64,
    node: NodeId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.node.cmp(&self.node))
    }
}

pub fn dijkstra(graph: &Graph, start: NodeId, end: NodeId) -> AlgorithmResult {
    let mut trace = Trace::start(DIJKSTRA_NAME);
    if let Some(message) = check_endpoints(graph, start, end) {
        return trace.fail(message);
    }

    let mut dist: FxHashMap<NodeId, f64> = FxHashMap::default();
    let mut previous: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut settled: FxHashSet<NodeId> = FxHashSet::default();
    let mut heap = BinaryHeap::new();

    dist.insert(start, 0.0);
    heap.push(Frontier {
        priority: 0.0,
        g: 0.0,
        node: start,
    });

    while let Some(Frontier { g: d, node, .. }) = heap.pop() {
        if !settled.insert(node) {
            continue;
        }
        trace.record(StepEvent::Settle { node, distance: d });
        if node == end {
            break;
        }

        for &n in graph.neighbor_ids(node) {
            if settled.contains(&n) {
                continue;
            }
            let Some(edge) = graph.edge(node, n) else {
                debug_assert!(false, "adjacency lists a pair with no edge");
                continue;
            };
            let candidate = d + edge.cost();
            if candidate < dist.get(&n).copied().unwrap_or(f64::INFINITY) {
                dist.insert(n, candidate);
                previous.insert(n, node);
                heap.push(Frontier {
                    priority: candidate,
                    g: candidate,
                    node: n,
                });
                trace.record(StepEvent::Relax {
                    node: n,
                    from: node,
                    distance: candidate,
                });
            }
        }
    }

    finish_path(
        graph,
        trace,
        Search {
            start,
            end,
            reached: settled.contains(&end),
            dist: &dist,
            previous: &previous,
            nodes_explored: settled.len(),
        },
    )
}

/// A* with `h(n) = euclid(n, end) * A_STAR_HEURISTIC_SCALE` over layout positions.
///
/// Layout distance and similarity cost are unrelated metrics, so `h` is not guaranteed to be
/// admissible and the returned path is not guaranteed to be the cheapest one. Use
/// [`dijkstra`] when optimality matters.
pub fn a_star(graph: &Graph, start: NodeId, end: NodeId) -> AlgorithmResult {
    let mut trace = Trace::start(A_STAR_NAME);
    if let Some(message) = check_endpoints(graph, start, end) {
        return trace.fail(message);
    }
    let Some(goal) = graph.node(end) else {
        return trace.fail(format!("end node {end} not found"));
    };

    let heuristic = |id: NodeId| -> f64 {
        graph
            .node(id)
            .map_or(f64::INFINITY, |n| layout_heuristic(n, goal))
    };

    let mut g_score: FxHashMap<NodeId, f64> = FxHashMap::default();
    let mut came_from: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut closed: FxHashSet<NodeId> = FxHashSet::default();
    let mut heap = BinaryHeap::new();

    g_score.insert(start, 0.0);
    heap.push(Frontier {
        priority: heuristic(start),
        g: 0.0,
        node: start,
    });

    let mut reached = false;
    while let Some(Frontier {
        priority: f,
        g,
        node,
    }) = heap.pop()
    {
        if closed.contains(&node) || g > g_score.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        trace.record(StepEvent::Expand {
            node,
            g_score: g,
            f_score: f,
            open: heap.len(),
            closed: closed.len(),
        });
        closed.insert(node);
        if node == end {
            reached = true;
            break;
        }

        for &n in graph.neighbor_ids(node) {
            if closed.contains(&n) {
                continue;
            }
            let Some(edge) = graph.edge(node, n) else {
                debug_assert!(false, "adjacency lists a pair with no edge");
                continue;
            };
            let tentative = g + edge.cost();
            if tentative < g_score.get(&n).copied().unwrap_or(f64::INFINITY) {
                let f_score = tentative + heuristic(n);
                g_score.insert(n, tentative);
                came_from.insert(n, node);
                heap.push(Frontier {
                    priority: f_score,
                    g: tentative,
                    node: n,
                });
                trace.record(StepEvent::UpdateEstimate {
                    node: n,
                    from: node,
                    g_score: tentative,
                    f_score,
                });
            }
        }
    }

    finish_path(
        graph,
        trace,
        Search {
            start,
            end,
            reached,
            dist: &g_score,
            previous: &came_from,
            nodes_explored: closed.len(),
        },
    )
}

pub fn layout_heuristic(node: &Node, goal: &Node) -> f64 {
    node.distance_to(goal) * A_STAR_HEURISTIC_SCALE
}

fn check_endpoints(graph: &Graph, start: NodeId, end: NodeId) -> Option<String> {
    if !graph.has_node(start) {
        return Some(format!("start node {start} not found"));
    }
    if !graph.has_node(end) {
        return Some(format!("end node {end} not found"));
    }
    None
}

struct Search<'a> {
    start: NodeId,
    end: NodeId,
    reached: bool,
    dist: &'a FxHashMap<NodeId, f64>,
    previous: &'a FxHashMap<NodeId, NodeId>,
    nodes_explored: usize,
}

fn finish_path(graph: &Graph, trace: Trace, search: Search<'_>) -> AlgorithmResult {
    let Search {
        start,
        end,
        reached,
        dist,
        previous,
        nodes_explored,
    } = search;

    let distances: IndexMap<NodeId, f64> = graph
        .nodes()
        .filter_map(|n| {
            dist.get(&n.id())
                .copied()
                .filter(|d| d.is_finite())
                .map(|d| (n.id(), d))
        })
        .collect();

    let total_cost = dist.get(&end).copied().filter(|d| reached && d.is_finite());
    let Some(total_cost) = total_cost else {
        return trace.finish(
            false,
            Payload::Path(PathOutput {
                start,
                end,
                path: Vec::new(),
                path_edges: Vec::new(),
                total_cost: None,
                distances,
                nodes_explored,
            }),
            format!("no path between {start} and {end}"),
        );
    };

    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        let Some(&p) = previous.get(&cur) else {
            debug_assert!(false, "broken predecessor chain");
            break;
        };
        path.push(p);
        cur = p;
    }
    path.reverse();
    let path_edges: Vec<(NodeId, NodeId)> = path.windows(2).map(|w| (w[0], w[1])).collect();

    let message = format!(
        "path found: {} nodes, cost {total_cost:.3}",
        path.len()
    );
    trace.finish(
        true,
        Payload::Path(PathOutput {
            start,
            end,
            path,
            path_edges,
            total_cost: Some(total_cost),
            distances,
            nodes_explored,
        }),
        message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_pops_smallest_priority_then_g_then_id() {
        let mut heap = BinaryHeap::new();
        heap.push(Frontier {
            priority: 2.0,
            g: 0.0,
            node: 1,
        });
        heap.push(Frontier {
            priority: 1.0,
            g: 0.5,
            node: 9,
        });
        heap.push(Frontier {
            priority: 1.0,
            g: 0.5,
            node: 3,
        });
        heap.push(Frontier {
            priority: 1.0,
            g: 0.2,
            node: 7,
        });
        let order: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|f| f.node)).collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }
}
