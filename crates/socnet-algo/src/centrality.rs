//! Normalized degree centrality with a deterministic top-k ranking.

use crate::result::{AlgorithmResult, Payload, StepEvent, Trace};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use socnet_graph::{Graph, NodeId};

pub const CENTRALITY_NAME: &str = "Degree Centrality";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralityOptions {
    pub top_k: usize,
}

impl Default for CentralityOptions {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityOutput {
    /// `degree / (n - 1)`, in node order.
    pub centrality: IndexMap<NodeId, f64>,
    pub degrees: IndexMap<NodeId, usize>,
    /// Sorted by centrality, then degree, both descending. Ties keep node order.
    pub top_k: Vec<RankedNode>,
    pub statistics: CentralityStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    /// 1-based.
    pub rank: usize,
    pub node: NodeId,
    pub name: String,
    pub degree: usize,
    pub centrality: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CentralityStatistics {
    pub average_centrality: f64,
    pub max_centrality: f64,
    pub min_centrality: f64,
    pub average_degree: f64,
    pub max_degree: usize,
    pub min_degree: usize,
}

pub fn degree_centrality(graph: &Graph, options: &CentralityOptions) -> AlgorithmResult {
    let mut trace = Trace::start(CENTRALITY_NAME);
    if graph.is_empty() {
        return trace.finish(
            true,
            Payload::Centrality(CentralityOutput {
                centrality: IndexMap::new(),
                degrees: IndexMap::new(),
                top_k: Vec::new(),
                statistics: CentralityStatistics::default(),
            }),
            "graph is empty",
        );
    }

    let n = graph.node_count();
    let mut centrality = IndexMap::with_capacity(n);
    let mut degrees = IndexMap::with_capacity(n);
    for node in graph.nodes() {
        let id = node.id();
        let degree = graph.degree(id);
        let c = normalized(degree, n);
        degrees.insert(id, degree);
        centrality.insert(id, c);
        trace.record(StepEvent::Calculate {
            node: id,
            degree,
            centrality: c,
        });
    }

    let mut ranking: Vec<(NodeId, f64, usize)> = centrality
        .iter()
        .map(|(&id, &c)| (id, c, degrees[&id]))
        .collect();
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| b.2.cmp(&a.2)));

    let mut top_k = Vec::with_capacity(options.top_k.min(n));
    for (i, &(id, c, degree)) in ranking.iter().take(options.top_k).enumerate() {
        let rank = i + 1;
        top_k.push(RankedNode {
            rank,
            node: id,
            name: graph.node(id).map(|n| n.name.clone()).unwrap_or_default(),
            degree,
            centrality: c,
        });
        trace.record(StepEvent::Rank {
            rank,
            node: id,
            centrality: c,
        });
    }

    let statistics = summarize(&centrality, &degrees);
    let message = match top_k.first() {
        Some(top) => format!("most central node: {} (degree {})", top.name, top.degree),
        None => "no nodes ranked".to_string(),
    };
    trace.finish(
        true,
        Payload::Centrality(CentralityOutput {
            centrality,
            degrees,
            top_k,
            statistics,
        }),
        message,
    )
}

fn normalized(degree: usize, n: usize) -> f64 {
    if n > 1 {
        degree as f64 / (n - 1) as f64
    } else {
        0.0
    }
}

fn summarize(
    centrality: &IndexMap<NodeId, f64>,
    degrees: &IndexMap<NodeId, usize>,
) -> CentralityStatistics {
    let n = centrality.len().max(1) as f64;
    let values = || centrality.values().copied();
    CentralityStatistics {
        average_centrality: values().sum::<f64>() / n,
        max_centrality: values().fold(0.0, f64::max),
        min_centrality: values().reduce(f64::min).unwrap_or(0.0),
        average_degree: degrees.values().sum::<usize>() as f64 / n,
        max_degree: degrees.values().copied().max().unwrap_or(0),
        min_degree: degrees.values().copied().min().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node_has_zero_centrality() {
        assert_eq!(normalized(0, 1), 0.0);
        assert_eq!(normalized(3, 4), 1.0);
    }
}
