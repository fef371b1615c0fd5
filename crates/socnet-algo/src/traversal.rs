//! Breadth-first and depth-first traversal from a single start node.

use crate::result::{AlgorithmResult, Payload, StepEvent, Trace};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Serialize;
use socnet_graph::{Graph, NodeId};
use std::collections::VecDeque;

pub const BFS_NAME: &str = "Breadth-First Search";
pub const DFS_NAME: &str = "Depth-First Search";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BfsOutput {
    pub start: NodeId,
    pub visit_order: Vec<NodeId>,
    /// Hop distance from `start`, in visit order.
    pub levels: IndexMap<NodeId, usize>,
    pub visited_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DfsOutput {
    pub start: NodeId,
    pub visit_order: Vec<NodeId>,
    pub discovery_time: IndexMap<NodeId, u32>,
    pub finish_time: IndexMap<NodeId, u32>,
    pub visited_count: usize,
}

pub fn bfs(graph: &Graph, start: NodeId) -> AlgorithmResult {
    let mut trace = Trace::start(BFS_NAME);
    if !graph.has_node(start) {
        return trace.fail(format!("node {start} not found"));
    }

    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
    let mut visit_order = Vec::new();
    let mut levels = IndexMap::new();

    seen.insert(start);
    queue.push_back((start, 0));
    while let Some((node, level)) = queue.pop_front() {
        visit_order.push(node);
        levels.insert(node, level);
        trace.record(StepEvent::Visit { node, level });

        for &n in graph.neighbor_ids(node) {
            if seen.insert(n) {
                queue.push_back((n, level + 1));
                trace.record(StepEvent::Discover {
                    node: n,
                    from: node,
                    level: level + 1,
                });
            }
        }
    }

    let visited_count = visit_order.len();
    trace.finish(
        true,
        Payload::Bfs(BfsOutput {
            start,
            visit_order,
            levels,
            visited_count,
        }),
        format!("{visited_count} nodes visited"),
    )
}

/// Iterative DFS. The stack holds `(node, next neighbour position)` so deep graphs cannot
/// overflow the call stack; the event order matches the recursive formulation.
pub fn dfs(graph: &Graph, start: NodeId) -> AlgorithmResult {
    let mut trace = Trace::start(DFS_NAME);
    if !graph.has_node(start) {
        return trace.fail(format!("node {start} not found"));
    }

    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut clock = DfsClock::default();
    let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];
    seen.insert(start);
    clock.enter(start, 0, &mut trace);

    while let Some(top) = stack.last_mut() {
        let node = top.0;
        let Some(&next) = graph.neighbor_ids(node).get(top.1) else {
            stack.pop();
            clock.finish(node, &mut trace);
            continue;
        };
        top.1 += 1;
        if !seen.insert(next) {
            continue;
        }
        let depth = stack.len();
        trace.record(StepEvent::ExploreEdge {
            from: node,
            to: next,
            depth,
        });
        clock.enter(next, depth, &mut trace);
        stack.push((next, 0));
    }

    let visited_count = clock.visit_order.len();
    trace.finish(
        true,
        Payload::Dfs(DfsOutput {
            start,
            visit_order: clock.visit_order,
            discovery_time: clock.discovery_time,
            finish_time: clock.finish_time,
            visited_count,
        }),
        format!("{visited_count} nodes visited"),
    )
}

/// Pre/post numbering shared by entry and exit.
#[derive(Default)]
struct DfsClock {
    now: u32,
    visit_order: Vec<NodeId>,
    discovery_time: IndexMap<NodeId, u32>,
    finish_time: IndexMap<NodeId, u32>,
}

impl DfsClock {
    fn enter(&mut self, node: NodeId, depth: usize, trace: &mut Trace) {
        self.now += 1;
        self.visit_order.push(node);
        self.discovery_time.insert(node, self.now);
        trace.record(StepEvent::Enter {
            node,
            depth,
            discovery_time: self.now,
        });
    }

    fn finish(&mut self, node: NodeId, trace: &mut Trace) {
        self.now += 1;
        self.finish_time.insert(node, self.now);
        trace.record(StepEvent::Finish {
            node,
            finish_time: self.now,
        });
    }
}
