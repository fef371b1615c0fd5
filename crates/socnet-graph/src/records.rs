//! Plain records exchanged with import/export collaborators.
//!
//! The JSON shape is `{nodes: [...], edges: [{source_id, target_id}]}`. The CSV shape is one row
//! per node with a comma-joined neighbour list. Weights are never persisted: they are recomputed
//! from node state when a graph is rebuilt, and so is `connection_count`.

use crate::edge::EdgeKey;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphOptions};
use crate::node::{NewNode, Node, NodeId, round2};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub activity: Option<f64>,
    #[serde(default)]
    pub interaction: Option<f64>,
    /// Informational on export; recomputed on import.
    #[serde(default)]
    pub connection_count: usize,
}

impl From<&Node> for NodeRecord {
    fn from(n: &Node) -> Self {
        Self {
            id: n.id(),
            name: n.name.clone(),
            x: Some(n.x),
            y: Some(n.y),
            activity: Some(n.activity()),
            interaction: Some(n.interaction()),
            connection_count: n.connection_count(),
        }
    }
}

impl From<&NodeRecord> for NewNode {
    fn from(r: &NodeRecord) -> Self {
        NewNode {
            id: Some(r.id),
            name: Some(r.name.clone()),
            position: r.x.zip(r.y),
            activity: r.activity,
            interaction: r.interaction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source_id: NodeId,
    pub target_id: NodeId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

pub const CSV_HEADER: [&str; 8] = [
    "DugumId",
    "Isim",
    "Ozellik_I (Aktiflik)",
    "Ozellik_II (Etkilesim)",
    "Ozellik_III (Bagl. Sayisi)",
    "X",
    "Y",
    "Komsular",
];

/// One CSV row. Field names map onto [`CSV_HEADER`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "DugumId")]
    pub id: NodeId,
    #[serde(rename = "Isim", default)]
    pub name: String,
    #[serde(rename = "Ozellik_I (Aktiflik)")]
    pub activity: f64,
    #[serde(rename = "Ozellik_II (Etkilesim)")]
    pub interaction: f64,
    #[serde(rename = "Ozellik_III (Bagl. Sayisi)", default)]
    pub connection_count: usize,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Komsular", default)]
    pub neighbors: String,
}

impl CsvRow {
    pub fn neighbor_ids(&self) -> Result<Vec<NodeId>> {
        self.neighbors
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<NodeId>().map_err(|_| GraphError::InvalidRecord {
                    message: format!("node {}: bad neighbour id {s:?}", self.id),
                })
            })
            .collect()
    }
}

impl Graph {
    pub fn to_record(&self) -> GraphRecord {
        GraphRecord {
            nodes: self.nodes().map(NodeRecord::from).collect(),
            edges: self
                .edges()
                .map(|e| EdgeRecord {
                    source_id: e.source(),
                    target_id: e.target(),
                })
                .collect(),
        }
    }

    /// Rebuilds a graph from a record. A repeated node id is an error; edge records that would
    /// violate a structural invariant are skipped.
    pub fn from_record(record: &GraphRecord, options: GraphOptions) -> Result<Graph> {
        let mut g = Graph::new(options);
        for n in &record.nodes {
            g.add_node(NewNode::from(n))?;
        }
        for e in &record.edges {
            if g.add_edge(e.source_id, e.target_id).is_none() {
                tracing::debug!(
                    source = e.source_id,
                    target = e.target_id,
                    "skipping edge record"
                );
            }
        }
        Ok(g)
    }

    pub fn to_csv_rows(&self) -> Vec<CsvRow> {
        self.nodes()
            .map(|n| CsvRow {
                id: n.id(),
                name: n.name.clone(),
                activity: round2(n.activity()),
                interaction: round2(n.interaction()),
                connection_count: n.connection_count(),
                x: round2(n.x),
                y: round2(n.y),
                neighbors: self
                    .neighbor_ids(n.id())
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            })
            .collect()
    }

    /// Rebuilds a graph from CSV rows. Repeated rows for the same id keep the first one; edges
    /// are collapsed by unordered pair and dangling neighbour ids are ignored.
    pub fn from_csv_rows(rows: &[CsvRow], options: GraphOptions) -> Result<Graph> {
        let mut g = Graph::new(options);
        let mut pending: Vec<(NodeId, NodeId)> = Vec::new();

        for row in rows {
            let new_node = NewNode::named(row.name.clone())
                .id(row.id)
                .at(row.x, row.y)
                .activity(row.activity)
                .interaction(row.interaction);
            match g.add_node(new_node) {
                Ok(_) => {}
                Err(GraphError::DuplicateNode { id }) => {
                    tracing::debug!(id, "skipping repeated CSV row");
                }
                Err(err) => return Err(err),
            }
            for n in row.neighbor_ids()? {
                pending.push((row.id, n));
            }
        }

        let mut seen: FxHashSet<EdgeKey> = FxHashSet::default();
        for (a, b) in pending {
            if !seen.insert(EdgeKey::new(a, b)) {
                continue;
            }
            if g.has_node(a) && g.has_node(b) {
                g.add_edge(a, b);
            }
        }
        Ok(g)
    }
}
