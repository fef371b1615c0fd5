//! Welsh-Powell greedy coloring.
//!
//! Gives a proper coloring whose size is an upper bound on the chromatic number, at most
//! `max_degree + 1`. It is not an exact minimum-coloring solver.

use crate::palette;
use crate::result::{AlgorithmResult, Payload, StepEvent, Trace};
use indexmap::IndexMap;
use serde::Serialize;
use socnet_graph::{Graph, NodeId, Rgb};

pub const COLORING_NAME: &str = "Welsh-Powell Coloring";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColoringOutput {
    /// Node to color index, in assignment order.
    pub coloring: IndexMap<NodeId, usize>,
    /// Number of colors used.
    pub chromatic_number: usize,
    /// Nodes by degree descending; equal degrees keep node order.
    pub node_order: Vec<NodeId>,
    /// Members per color index.
    pub color_groups: Vec<Vec<NodeId>>,
    pub color_table: Vec<ColorClass>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorClass {
    pub color_index: usize,
    pub color_name: &'static str,
    pub color_rgb: Rgb,
    pub nodes: Vec<NodeId>,
    pub node_names: Vec<String>,
    pub count: usize,
}

pub fn welsh_powell(graph: &Graph) -> AlgorithmResult {
    let mut trace = Trace::start(COLORING_NAME);
    if graph.is_empty() {
        return trace.finish(
            true,
            Payload::Coloring(ColoringOutput {
                coloring: IndexMap::new(),
                chromatic_number: 0,
                node_order: Vec::new(),
                color_groups: Vec::new(),
                color_table: Vec::new(),
            }),
            "graph is empty",
        );
    }

    let mut order: Vec<(NodeId, usize)> = graph
        .nodes()
        .map(|n| (n.id(), graph.degree(n.id())))
        .collect();
    // `sort_by` is stable.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    trace.record(StepEvent::Sorted {
        order: order.clone(),
    });

    let mut coloring: IndexMap<NodeId, usize> = IndexMap::with_capacity(order.len());
    let mut color = 0;
    while coloring.len() < order.len() {
        for &(id, _) in &order {
            if coloring.contains_key(&id) {
                continue;
            }
            let clash = graph
                .neighbor_ids(id)
                .iter()
                .any(|n| coloring.get(n) == Some(&color));
            if clash {
                continue;
            }
            coloring.insert(id, color);
            trace.record(StepEvent::Color {
                node: id,
                color_index: color,
                color: palette::color(color),
            });
        }
        color += 1;
    }
    let chromatic_number = color;

    let mut color_groups: Vec<Vec<NodeId>> = vec![Vec::new(); chromatic_number];
    for (&id, &c) in &coloring {
        color_groups[c].push(id);
    }
    let color_table = color_groups
        .iter()
        .enumerate()
        .map(|(i, nodes)| ColorClass {
            color_index: i,
            color_name: palette::color_name(i),
            color_rgb: palette::color(i),
            nodes: nodes.clone(),
            node_names: nodes
                .iter()
                .filter_map(|id| graph.node(*id).map(|n| n.name.clone()))
                .collect(),
            count: nodes.len(),
        })
        .collect();

    trace.finish(
        true,
        Payload::Coloring(ColoringOutput {
            coloring,
            chromatic_number,
            node_order: order.into_iter().map(|(id, _)| id).collect(),
            color_groups,
            color_table,
        }),
        format!("graph colored with {chromatic_number} colors"),
    )
}
