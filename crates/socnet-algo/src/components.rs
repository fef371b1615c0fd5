//! Connected components by repeated BFS in node order.

use crate::palette;
use crate::result::{AlgorithmResult, Payload, StepEvent, Trace};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use socnet_graph::{Graph, NodeId, Rgb};
use std::collections::VecDeque;

pub const COMPONENTS_NAME: &str = "Connected Components";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentsOutput {
    /// Largest first. Components of equal size keep discovery order.
    pub components: Vec<Vec<NodeId>>,
    pub component_details: Vec<ComponentSummary>,
    pub component_count: usize,
    /// Node to index into `components`, in node order.
    pub component_map: IndexMap<NodeId, usize>,
    pub largest_component_size: usize,
    /// Members of size-1 components.
    pub isolated_nodes: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSummary {
    pub index: usize,
    pub nodes: Vec<NodeId>,
    pub size: usize,
    pub color: Rgb,
}

pub fn connected_components(graph: &Graph) -> AlgorithmResult {
    let mut trace = Trace::start(COMPONENTS_NAME);
    if graph.is_empty() {
        return trace.finish(
            true,
            Payload::Components(ComponentsOutput {
                components: Vec::new(),
                component_details: Vec::new(),
                component_count: 0,
                component_map: IndexMap::new(),
                largest_component_size: 0,
                isolated_nodes: Vec::new(),
            }),
            "graph is empty",
        );
    }

    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut components: Vec<Vec<NodeId>> = Vec::new();

    for root in graph.nodes().map(|n| n.id()) {
        if !seen.insert(root) {
            continue;
        }
        let index = components.len();
        let mut members = Vec::new();
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            members.push(node);
            trace.record(StepEvent::ComponentVisit {
                node,
                component: index,
            });
            for &n in graph.neighbor_ids(node) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        trace.record(StepEvent::ComponentComplete {
            component: index,
            nodes: members.clone(),
            color: palette::color(index),
        });
        components.push(members);
    }

    components.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut owner: FxHashMap<NodeId, usize> = FxHashMap::default();
    for (i, comp) in components.iter().enumerate() {
        for &n in comp {
            owner.insert(n, i);
        }
    }
    let component_map: IndexMap<NodeId, usize> = graph
        .nodes()
        .filter_map(|n| owner.get(&n.id()).map(|&i| (n.id(), i)))
        .collect();

    let component_details = components
        .iter()
        .enumerate()
        .map(|(index, nodes)| ComponentSummary {
            index,
            nodes: nodes.clone(),
            size: nodes.len(),
            color: palette::color(index),
        })
        .collect();
    let isolated_nodes = components
        .iter()
        .filter(|c| c.len() == 1)
        .map(|c| c[0])
        .collect();
    let component_count = components.len();
    let largest_component_size = components.first().map_or(0, Vec::len);

    trace.finish(
        true,
        Payload::Components(ComponentsOutput {
            components,
            component_details,
            component_count,
            component_map,
            largest_component_size,
            isolated_nodes,
        }),
        format!("{component_count} connected components found"),
    )
}
