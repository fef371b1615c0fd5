//! Common result envelope and step trace.
//!
//! A trace is built locally for each call and handed back inside the result; nothing is shared
//! across calls.

use crate::centrality::CentralityOutput;
use crate::coloring::ColoringOutput;
use crate::components::ComponentsOutput;
use crate::shortest_path::PathOutput;
use crate::traversal::{BfsOutput, DfsOutput};
use serde::{Serialize, Serializer};
use socnet_graph::{NodeId, Rgb};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmResult {
    pub name: &'static str,
    pub success: bool,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
    pub payload: Payload,
    pub steps: Vec<Step>,
    pub message: String,
}

/// Algorithm-specific output, one fixed schema per algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    /// The run failed before producing anything (unknown start or end node).
    None,
    Bfs(BfsOutput),
    Dfs(DfsOutput),
    Path(PathOutput),
    Components(ComponentsOutput),
    Centrality(CentralityOutput),
    Coloring(ColoringOutput),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Time since the algorithm started.
    #[serde(rename = "at_ms", serialize_with = "as_millis")]
    pub at: Duration,
    #[serde(flatten)]
    pub event: StepEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepEvent {
    /// BFS dequeue.
    Visit { node: NodeId, level: usize },
    /// BFS enqueue of a newly seen neighbour.
    Discover {
        node: NodeId,
        from: NodeId,
        level: usize,
    },
    /// DFS pre-order entry.
    Enter {
        node: NodeId,
        depth: usize,
        discovery_time: u32,
    },
    ExploreEdge {
        from: NodeId,
        to: NodeId,
        depth: usize,
    },
    /// DFS post-order exit.
    Finish { node: NodeId, finish_time: u32 },
    /// Dijkstra pop of a node whose distance is final.
    Settle { node: NodeId, distance: f64 },
    Relax {
        node: NodeId,
        from: NodeId,
        distance: f64,
    },
    /// A* pop from the open set.
    Expand {
        node: NodeId,
        g_score: f64,
        f_score: f64,
        open: usize,
        closed: usize,
    },
    UpdateEstimate {
        node: NodeId,
        from: NodeId,
        g_score: f64,
        f_score: f64,
    },
    ComponentVisit { node: NodeId, component: usize },
    ComponentComplete {
        component: usize,
        nodes: Vec<NodeId>,
        color: Rgb,
    },
    Calculate {
        node: NodeId,
        degree: usize,
        centrality: f64,
    },
    Rank {
        rank: usize,
        node: NodeId,
        centrality: f64,
    },
    /// Welsh-Powell processing order as `(node, degree)`.
    Sorted { order: Vec<(NodeId, usize)> },
    Color {
        node: NodeId,
        color_index: usize,
        color: Rgb,
    },
}

impl StepEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            StepEvent::Visit { .. } => "visit",
            StepEvent::Discover { .. } => "discover",
            StepEvent::Enter { .. } => "enter",
            StepEvent::ExploreEdge { .. } => "explore_edge",
            StepEvent::Finish { .. } => "finish",
            StepEvent::Settle { .. } => "settle",
            StepEvent::Relax { .. } => "relax",
            StepEvent::Expand { .. } => "expand",
            StepEvent::UpdateEstimate { .. } => "update_estimate",
            StepEvent::ComponentVisit { .. } => "component_visit",
            StepEvent::ComponentComplete { .. } => "component_complete",
            StepEvent::Calculate { .. } => "calculate",
            StepEvent::Rank { .. } => "rank",
            StepEvent::Sorted { .. } => "sorted",
            StepEvent::Color { .. } => "color",
        }
    }

    /// The node the event is primarily about, if any.
    pub fn node(&self) -> Option<NodeId> {
        match *self {
            StepEvent::Visit { node, .. }
            | StepEvent::Discover { node, .. }
            | StepEvent::Enter { node, .. }
            | StepEvent::Finish { node, .. }
            | StepEvent::Settle { node, .. }
            | StepEvent::Relax { node, .. }
            | StepEvent::Expand { node, .. }
            | StepEvent::UpdateEstimate { node, .. }
            | StepEvent::ComponentVisit { node, .. }
            | StepEvent::Calculate { node, .. }
            | StepEvent::Rank { node, .. }
            | StepEvent::Color { node, .. } => Some(node),
            StepEvent::ExploreEdge { to, .. } => Some(to),
            StepEvent::ComponentComplete { .. } | StepEvent::Sorted { .. } => None,
        }
    }
}

impl AlgorithmResult {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Events of one kind, in trace order.
    pub fn events<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a StepEvent> + 'a {
        self.steps
            .iter()
            .map(|s| &s.event)
            .filter(move |e| e.kind() == kind)
    }
}

/// Per-call trace builder.
pub(crate) struct Trace {
    name: &'static str,
    started: Instant,
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn start(name: &'static str) -> Self {
        Self {
            name,
            started: Instant::now(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, event: StepEvent) {
        self.steps.push(Step {
            at: self.started.elapsed(),
            event,
        });
    }

    pub(crate) fn finish(
        self,
        success: bool,
        payload: Payload,
        message: impl Into<String>,
    ) -> AlgorithmResult {
        let elapsed = self.started.elapsed();
        let message = message.into();
        tracing::debug!(
            algorithm = self.name,
            success,
            elapsed_us = elapsed.as_micros() as u64,
            steps = self.steps.len(),
            %message,
            "algorithm finished"
        );
        AlgorithmResult {
            name: self.name,
            success,
            elapsed,
            payload,
            steps: self.steps,
            message,
        }
    }

    pub(crate) fn fail(self, message: impl Into<String>) -> AlgorithmResult {
        self.finish(false, Payload::None, message)
    }
}

fn as_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_keeps_event_order() {
        let mut t = Trace::start("test");
        t.record(StepEvent::Visit { node: 1, level: 0 });
        t.record(StepEvent::Finish {
            node: 1,
            finish_time: 2,
        });
        let r = t.finish(true, Payload::None, "ok");
        let kinds: Vec<&str> = r.steps.iter().map(|s| s.event.kind()).collect();
        assert_eq!(kinds, vec!["visit", "finish"]);
        assert!(r.steps[0].at <= r.steps[1].at);
        assert!(r.steps[1].at <= r.elapsed);
    }

    #[test]
    fn steps_serialize_flat_with_type_tag() {
        let step = Step {
            at: Duration::from_millis(2),
            event: StepEvent::Discover {
                node: 3,
                from: 1,
                level: 1,
            },
        };
        let v = serde_json::to_value(&step).unwrap();
        assert_eq!(v["type"], "discover");
        assert_eq!(v["node"], 3);
        assert_eq!(v["at_ms"], 2.0);
    }
}
