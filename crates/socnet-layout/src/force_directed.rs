//! Annealed spring-electrical simulation.
//!
//! One step:
//! 1. pairwise repulsion `repulsion / d²` with `d` floored at `min_distance`;
//! 2. linear spring attraction `attraction * d` along each edge;
//! 3. a unit pull toward the centroid scaled by `gravity * temperature`;
//! 4. velocity clamp to `max_velocity`, scale by temperature, integrate `x += v * damping`;
//! 5. geometric cooling down to `min_temperature`.
//!
//! Velocities are rebuilt from forces every step, so the stored `vx`/`vy` on each node is the
//! velocity applied on the last step.

use crate::options::{ForceDirectedOptions, ParameterUpdate};
use nalgebra as na;
use socnet_graph::Graph;

type Vec2 = na::Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepStats {
    /// Temperature after cooling.
    pub temperature: f64,
    /// Sum of position changes over all nodes.
    pub total_displacement: f64,
}

#[derive(Debug, Clone)]
pub struct ForceDirectedLayout {
    options: ForceDirectedOptions,
    temperature: f64,
    running: bool,
}

impl Default for ForceDirectedLayout {
    fn default() -> Self {
        Self::new(ForceDirectedOptions::default())
    }
}

impl ForceDirectedLayout {
    /// A new engine starts running at its initial temperature.
    pub fn new(options: ForceDirectedOptions) -> Self {
        Self {
            temperature: options.initial_temperature,
            options,
            running: true,
        }
    }

    pub fn options(&self) -> &ForceDirectedOptions {
        &self.options
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_parameters(&mut self, update: ParameterUpdate) {
        self.options.apply(update);
    }

    pub fn start(&mut self) {
        self.running = true;
        self.temperature = self.options.initial_temperature;
        tracing::debug!(temperature = self.temperature, "layout started");
    }

    pub fn stop(&mut self) {
        self.running = false;
        tracing::debug!(temperature = self.temperature, "layout stopped");
    }

    /// Restores the initial temperature and zeroes every node velocity. Positions and structure
    /// are untouched.
    pub fn reset(&mut self, graph: &mut Graph) {
        self.temperature = self.options.initial_temperature;
        for n in graph.nodes_mut() {
            n.reset_velocity();
        }
        tracing::debug!("layout reset");
    }

    pub fn reheat(&mut self) {
        self.temperature =
            (self.temperature + self.options.reheat_amount).min(self.options.initial_temperature);
        tracing::debug!(temperature = self.temperature, "layout reheated");
    }

    /// Steps only while running.
    pub fn tick(&mut self, graph: &mut Graph) -> Option<StepStats> {
        self.running.then(|| self.step(graph))
    }

    /// Runs a fixed number of steps regardless of the running flag.
    pub fn run(&mut self, graph: &mut Graph, iterations: usize) -> StepStats {
        let mut last = StepStats {
            temperature: self.temperature,
            total_displacement: 0.0,
        };
        for _ in 0..iterations {
            last = self.step(graph);
        }
        tracing::debug!(
            iterations,
            nodes = graph.node_count(),
            temperature = last.temperature,
            last_displacement = last.total_displacement,
            "layout run finished"
        );
        last
    }

    pub fn step(&mut self, graph: &mut Graph) -> StepStats {
        let n = graph.node_count();
        if n == 0 {
            return StepStats {
                temperature: self.temperature,
                total_displacement: 0.0,
            };
        }
        let o = self.options;
        let positions: Vec<Vec2> = graph.nodes().map(|n| Vec2::new(n.x, n.y)).collect();
        let mut forces: Vec<Vec2> = vec![Vec2::zeros(); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let d = delta.norm().max(o.min_distance);
                if d > 0.0 {
                    // (k / d²) along delta / d.
                    let push = delta * (o.repulsion / (d * d * d));
                    forces[i] += push;
                    forces[j] -= push;
                }
            }
        }

        for e in graph.edges() {
            let (Some(s), Some(t)) = (graph.node_index(e.source()), graph.node_index(e.target()))
            else {
                debug_assert!(false, "edge endpoint missing from node map");
                continue;
            };
            // (attraction * d) along delta / d.
            let pull = (positions[t] - positions[s]) * o.attraction;
            forces[s] += pull;
            forces[t] -= pull;
        }

        let centroid = positions.iter().fold(Vec2::zeros(), |acc, p| acc + p) / n as f64;
        let gravity = o.gravity * self.temperature;
        for (f, p) in forces.iter_mut().zip(&positions) {
            let to_center = centroid - p;
            let d = to_center.norm();
            if d > 0.0 {
                *f += to_center * (gravity / d);
            }
        }

        let mut total_displacement = 0.0;
        for (node, mut v) in graph.nodes_mut().zip(forces) {
            let speed = v.norm();
            if speed > o.max_velocity {
                v *= o.max_velocity / speed;
            }
            v *= self.temperature;
            let delta = v * o.damping;
            node.vx = v.x;
            node.vy = v.y;
            node.x += delta.x;
            node.y += delta.y;
            total_displacement += delta.norm();
        }

        self.temperature = (self.temperature * o.cooling_rate).max(o.min_temperature);
        StepStats {
            temperature: self.temperature,
            total_displacement,
        }
    }
}
