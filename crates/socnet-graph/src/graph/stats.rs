//! Read-only summaries consumed by tables and text exports.

use crate::node::NodeId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub average_degree: f64,
    pub max_degree: usize,
    pub min_degree: usize,
}

/// Weighted adjacency matrix indexed by ascending node id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    pub node_ids: Vec<NodeId>,
    /// `weights[i][j]` is the edge weight between `node_ids[i]` and `node_ids[j]`, or `0.0`.
    pub weights: Vec<Vec<f64>>,
}

impl AdjacencyMatrix {
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.node_ids.binary_search(&id).ok()
    }

    pub fn get(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Some(self.weights[i][j])
    }
}
