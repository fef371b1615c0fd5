#![forbid(unsafe_code)]

//! Read-only algorithm suite over a [`socnet_graph::Graph`].
//!
//! Every algorithm is a plain function of `(&Graph, parameters)` that returns an
//! [`AlgorithmResult`]: a success flag, a typed payload, a human-readable message and an ordered
//! step trace for replay. Node and neighbour iteration follows the graph's insertion order, so
//! identical graphs give identical results, step order included.

pub mod centrality;
pub mod coloring;
pub mod components;
pub mod palette;
pub mod result;
pub mod shortest_path;
pub mod traversal;

pub use centrality::{CentralityOptions, CentralityOutput, CentralityStatistics, RankedNode};
pub use coloring::{ColorClass, ColoringOutput};
pub use components::{ComponentSummary, ComponentsOutput};
pub use result::{AlgorithmResult, Payload, Step, StepEvent};
pub use shortest_path::{A_STAR_HEURISTIC_SCALE, PathOutput};
pub use traversal::{BfsOutput, DfsOutput};

use socnet_graph::{Graph, NodeId};

#[derive(Debug, Clone, PartialEq)]
pub enum Algorithm {
    Bfs { start: NodeId },
    Dfs { start: NodeId },
    Dijkstra { start: NodeId, end: NodeId },
    /// Heuristic search; see [`shortest_path::a_star`] for the caveat on optimality.
    AStar { start: NodeId, end: NodeId },
    ConnectedComponents,
    DegreeCentrality(CentralityOptions),
    WelshPowell,
}

impl Algorithm {
    /// Short identifier used on the command line and in logs.
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Bfs { .. } => "bfs",
            Algorithm::Dfs { .. } => "dfs",
            Algorithm::Dijkstra { .. } => "dijkstra",
            Algorithm::AStar { .. } => "astar",
            Algorithm::ConnectedComponents => "components",
            Algorithm::DegreeCentrality(_) => "centrality",
            Algorithm::WelshPowell => "coloring",
        }
    }
}

/// Runs one algorithm against the current graph state.
pub fn run(graph: &Graph, algorithm: &Algorithm) -> AlgorithmResult {
    match *algorithm {
        Algorithm::Bfs { start } => traversal::bfs(graph, start),
        Algorithm::Dfs { start } => traversal::dfs(graph, start),
        Algorithm::Dijkstra { start, end } => shortest_path::dijkstra(graph, start, end),
        Algorithm::AStar { start, end } => shortest_path::a_star(graph, start, end),
        Algorithm::ConnectedComponents => components::connected_components(graph),
        Algorithm::DegreeCentrality(opts) => centrality::degree_centrality(graph, &opts),
        Algorithm::WelshPowell => coloring::welsh_powell(graph),
    }
}
