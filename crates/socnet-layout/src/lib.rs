#![forbid(unsafe_code)]

//! Force-directed layout for [`socnet_graph::Graph`].
//!
//! The engine owns only its tunables, temperature and a running flag. The graph is passed into
//! every call, and the caller decides the tick cadence: one [`ForceDirectedLayout::step`] per
//! animation frame, or [`ForceDirectedLayout::run`] for a fixed number of iterations.

pub mod force_directed;
pub mod options;
pub mod placement;

pub use force_directed::{ForceDirectedLayout, StepStats};
pub use options::{ForceDirectedOptions, ParameterUpdate};

use socnet_graph::Graph;

/// Iteration count of a one-shot auto layout.
pub const AUTO_LAYOUT_ITERATIONS: usize = 150;

/// Places nodes on a jittered circle, then runs `iterations` steps from a fresh temperature.
/// Velocities are zero on return.
pub fn auto_layout(
    graph: &mut Graph,
    options: ForceDirectedOptions,
    iterations: usize,
    seed: u64,
) -> StepStats {
    placement::circle(graph, seed);
    let mut engine = ForceDirectedLayout::new(options);
    let stats = engine.run(graph, iterations);
    for n in graph.nodes_mut() {
        n.reset_velocity();
    }
    stats
}
