//! Similarity-derived edge weights.
//!
//! ```text
//! weight(i, j) = 1 / (1 + sqrt(Δactivity² + Δinteraction² + Δconnection_count²))
//! cost(i, j)   = 1 / weight(i, j)
//! ```
//!
//! Both are pure functions of current node state. The graph stores the weight on each edge and
//! refreshes it on every mutation that touches an endpoint; cost is always derived on demand.

use crate::node::Node;
use serde::Serialize;

/// Euclidean distance between two nodes in property space. Computed with `hypot` so large
/// interaction values stay finite.
pub fn property_distance(a: &Node, b: &Node) -> f64 {
    let da = a.activity() - b.activity();
    let di = a.interaction() - b.interaction();
    let dc = a.connection_count() as f64 - b.connection_count() as f64;
    da.hypot(dc).hypot(di)
}

pub fn calculate_weight(a: &Node, b: &Node) -> f64 {
    1.0 / (1.0 + property_distance(a, b))
}

pub fn calculate_cost(a: &Node, b: &Node) -> f64 {
    cost_from_weight(calculate_weight(a, b))
}

pub fn cost_from_weight(weight: f64) -> f64 {
    if weight > 0.0 {
        1.0 / weight
    } else {
        f64::INFINITY
    }
}

/// Weight expressed as a percentage.
pub fn similarity_score(a: &Node, b: &Node) -> f64 {
    calculate_weight(a, b) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyDifferences {
    pub activity: f64,
    pub interaction: f64,
    pub connection: f64,
    pub total_distance: f64,
}

pub fn property_differences(a: &Node, b: &Node) -> PropertyDifferences {
    PropertyDifferences {
        activity: (a.activity() - b.activity()).abs(),
        interaction: (a.interaction() - b.interaction()).abs(),
        connection: (a.connection_count() as f64 - b.connection_count() as f64).abs(),
        total_distance: property_distance(a, b),
    }
}
