//! Seeded sample networks for demos and benchmarks.

use crate::graph::{Graph, GraphOptions};
use crate::node::NewNode;
use crate::rng::XorShift64Star;
use std::f64::consts::TAU;

const NAMES: &[&str] = &[
    "Ahmet", "Mehmet", "Ayse", "Fatma", "Ali", "Veli", "Zeynep", "Elif", "Mustafa", "Huseyin",
    "Hatice", "Emine", "Omer", "Yusuf", "Ibrahim", "Osman", "Asli", "Selin", "Burak", "Emre",
    "Deniz", "Cem", "Can", "Arda", "Berk", "Kaan", "Mert", "Ece", "Irem", "Defne",
];

const CENTER: (f64, f64) = (400.0, 300.0);

/// Builds `node_count` nodes on a circle and links each unordered pair with probability
/// `edge_probability`. Identical arguments always produce the same graph.
pub fn generate(node_count: usize, edge_probability: f64, seed: u64) -> Graph {
    let mut rng = XorShift64Star::new(seed);
    let mut g = Graph::new(GraphOptions { seed });
    let radius = (50.0 + node_count as f64 * 8.0).min(300.0);
    let p = if edge_probability.is_finite() {
        edge_probability.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut ids = Vec::with_capacity(node_count);
    for i in 0..node_count {
        let angle = TAU * i as f64 / node_count as f64;
        let new_node = NewNode::named(sample_name(i))
            .at(
                CENTER.0 + radius * angle.cos(),
                CENTER.1 + radius * angle.sin(),
            )
            .activity(rng.next_f64_range(0.1, 1.0))
            .interaction(rng.next_f64_range(1.0, 50.0));
        // Fresh graph with auto ids: insertion cannot collide.
        let Ok(id) = g.add_node(new_node) else {
            debug_assert!(false, "auto id collided in a fresh graph");
            continue;
        };
        ids.push(id);
    }

    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            if rng.next_f64_unit() < p {
                g.add_edge(a, b);
            }
        }
    }
    g
}

fn sample_name(i: usize) -> String {
    let base = NAMES[i % NAMES.len()];
    match i / NAMES.len() {
        0 => base.to_string(),
        k => format!("{base}_{k}"),
    }
}
