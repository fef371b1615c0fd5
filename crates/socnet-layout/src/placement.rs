//! Starting positions for a fresh layout.

use socnet_graph::Graph;
use socnet_graph::rng::XorShift64Star;
use std::f64::consts::TAU;

pub const CENTER: (f64, f64) = (400.0, 300.0);
const JITTER: f64 = 20.0;

/// Spreads nodes evenly on a circle around [`CENTER`] with radius `min(350, 80 + 15n)` and a
/// seeded jitter of up to 20 units per axis. Velocities are zeroed.
pub fn circle(graph: &mut Graph, seed: u64) {
    let n = graph.node_count();
    if n == 0 {
        return;
    }
    let radius = (80.0 + 15.0 * n as f64).min(350.0);
    let mut rng = XorShift64Star::new(seed);
    for (i, node) in graph.nodes_mut().enumerate() {
        let angle = TAU * i as f64 / n as f64;
        let x = CENTER.0 + radius * angle.cos() + rng.next_f64_range(-JITTER, JITTER);
        let y = CENTER.1 + radius * angle.sin() + rng.next_f64_range(-JITTER, JITTER);
        node.set_position(x, y);
        node.reset_velocity();
    }
}
