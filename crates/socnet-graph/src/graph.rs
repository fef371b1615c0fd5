//! The [`Graph`] container.
//!
//! Nodes live in an insertion-ordered map keyed by id; edges live in a vector with a hash index
//! keyed by the unordered endpoint pair. Structural violations (self-loop, duplicate edge,
//! missing endpoint) are no-ops reported through the return value. Only an explicit duplicate
//! node id is an error.

mod adjacency;
mod options;
mod stats;

pub use options::GraphOptions;
pub use stats::{AdjacencyMatrix, GraphStatistics};

use crate::edge::{Edge, EdgeKey};
use crate::error::{GraphError, Result};
use crate::node::{NewNode, Node, NodeId, NodeUpdate};
use crate::rng::XorShift64Star;
use crate::weight::calculate_weight;
use adjacency::AdjacencyCache;
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

type NodeMap = IndexMap<NodeId, Node, FxBuildHasher>;

// Default placement box for nodes added without coordinates.
const PLACEMENT_X: (f64, f64) = (100.0, 700.0);
const PLACEMENT_Y: (f64, f64) = (100.0, 500.0);

#[derive(Debug, Clone)]
pub struct Graph {
    options: GraphOptions,
    nodes: NodeMap,
    edges: Vec<Edge>,
    edge_index: FxHashMap<EdgeKey, usize>,
    adjacency: AdjacencyCache,
    next_id: NodeId,
    placement: XorShift64Star,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl Graph {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: NodeMap::default(),
            edges: Vec::new(),
            edge_index: FxHashMap::default(),
            adjacency: AdjacencyCache::default(),
            next_id: 1,
            placement: XorShift64Star::new(options.seed),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Inserts a node and returns its id.
    ///
    /// Without an explicit id, the smallest unused id at or above the internal counter is taken.
    /// An explicit id that is already present is rejected with [`GraphError::DuplicateNode`].
    pub fn add_node(&mut self, new_node: NewNode) -> Result<NodeId> {
        let id = match new_node.id {
            Some(id) if self.nodes.contains_key(&id) => {
                return Err(GraphError::DuplicateNode { id });
            }
            Some(id) => id,
            None => {
                let mut id = self.next_id;
                while self.nodes.contains_key(&id) {
                    id = id
                        .checked_add(1)
                        .ok_or(GraphError::IdSpaceExhausted { from: self.next_id })?;
                }
                id
            }
        };

        let position = match new_node.position {
            Some(p) => p,
            None => (
                self.placement.next_f64_range(PLACEMENT_X.0, PLACEMENT_X.1),
                self.placement.next_f64_range(PLACEMENT_Y.0, PLACEMENT_Y.1),
            ),
        };

        self.nodes.insert(id, Node::new(id, new_node, position));
        self.adjacency.insert_node(id);
        if id >= self.next_id {
            self.next_id = id.saturating_add(1);
        }
        Ok(id)
    }

    /// Removes a node together with every incident edge. Former neighbours get their
    /// `connection_count` and incident weights refreshed.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.nodes.contains_key(&id) {
            return false;
        }

        let former = self.adjacency.remove_node(id);
        if !former.is_empty() {
            for &n in &former {
                self.edge_index.remove(&EdgeKey::new(id, n));
            }
            self.edges.retain(|e| !e.contains(id));
            self.reindex_edges_from(0);
        }
        self.nodes.shift_remove(&id);

        for n in former {
            self.sync_degree(n);
            self.refresh_incident_weights(n);
        }
        true
    }

    /// Applies a partial update. Incident edge weights are recomputed when activity or
    /// interaction change.
    pub fn update_node(&mut self, id: NodeId, update: NodeUpdate) -> bool {
        let touches_weight = update.touches_weight();
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        if let Some(name) = update.name {
            node.name = name;
        }
        if let Some((x, y)) = update.position {
            node.set_position(x, y);
        }
        if let Some(a) = update.activity {
            node.set_activity(a);
        }
        if let Some(i) = update.interaction {
            node.set_interaction(i);
        }
        if touches_weight {
            self.refresh_incident_weights(id);
        }
        true
    }

    /// Places a node by hand. Velocity is zeroed so the next layout tick starts from rest.
    pub fn move_node(&mut self, id: NodeId, x: f64, y: f64) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        node.set_position(x, y);
        node.reset_velocity();
        true
    }

    /// Connects two existing, distinct, not-yet-adjacent nodes. Returns `None` otherwise.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Option<&Edge> {
        if !self.nodes.contains_key(&source) || !self.nodes.contains_key(&target) {
            tracing::trace!(source, target, "add_edge rejected: missing endpoint");
            return None;
        }
        if source == target {
            tracing::trace!(source, "add_edge rejected: self-loop");
            return None;
        }
        let key = EdgeKey::new(source, target);
        if self.edge_index.contains_key(&key) {
            tracing::trace!(source, target, "add_edge rejected: duplicate edge");
            return None;
        }

        let idx = self.edges.len();
        self.edges.push(Edge::new(source, target, 1.0));
        self.edge_index.insert(key, idx);
        self.adjacency.link(source, target);

        // Both degrees changed, so every edge touching either endpoint needs a new weight.
        self.sync_degree(source);
        self.sync_degree(target);
        self.refresh_incident_weights(source);
        self.refresh_incident_weights(target);

        self.edges.get(idx)
    }

    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        let Some(idx) = self.edge_index.remove(&EdgeKey::new(a, b)) else {
            return false;
        };
        self.edges.remove(idx);
        self.reindex_edges_from(idx);
        self.adjacency.unlink(a, b);

        self.sync_degree(a);
        self.sync_degree(b);
        self.refresh_incident_weights(a);
        self.refresh_incident_weights(b);
        true
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency.contains(a, b)
    }

    pub fn edge(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        let idx = *self.edge_index.get(&EdgeKey::new(a, b))?;
        self.edges.get(idx)
    }

    pub fn edge_mut(&mut self, a: NodeId, b: NodeId) -> Option<&mut Edge> {
        let idx = *self.edge_index.get(&EdgeKey::new(a, b))?;
        self.edges.get_mut(idx)
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutable access to position, velocity, name and annotations. Weight-relevant properties
    /// go through [`Graph::update_node`].
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Position of `id` in node iteration order.
    pub fn node_index(&self, id: NodeId) -> Option<usize> {
        self.nodes.get_index_of(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.edges.iter_mut()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Neighbour ids in the order the connecting edges were added. Empty for unknown ids.
    pub fn neighbor_ids(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.neighbors(id)
    }

    pub fn neighbors(&self, id: NodeId) -> Vec<&Node> {
        self.adjacency
            .neighbors(id)
            .iter()
            .filter_map(|n| self.nodes.get(n))
            .collect()
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.neighbors(id).len()
    }

    /// Snapshot of the adjacency cache in node order.
    pub fn adjacency_list(&self) -> IndexMap<NodeId, Vec<NodeId>> {
        self.nodes
            .keys()
            .map(|&id| (id, self.adjacency.neighbors(id).to_vec()))
            .collect()
    }

    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let mut node_ids = self.node_ids();
        node_ids.sort_unstable();
        let n = node_ids.len();
        let mut weights = vec![vec![0.0; n]; n];
        let index: FxHashMap<NodeId, usize> =
            node_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        for e in &self.edges {
            let (Some(&i), Some(&j)) = (index.get(&e.source()), index.get(&e.target())) else {
                debug_assert!(false, "edge endpoint missing from node map");
                continue;
            };
            weights[i][j] = e.weight();
            weights[j][i] = e.weight();
        }
        AdjacencyMatrix { node_ids, weights }
    }

    /// `2|E| / (|V| (|V| - 1))`, or `0` for fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.nodes.len();
        if n <= 1 {
            return 0.0;
        }
        (2 * self.edges.len()) as f64 / (n * (n - 1)) as f64
    }

    pub fn average_degree(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        (2 * self.edges.len()) as f64 / self.nodes.len() as f64
    }

    pub fn statistics(&self) -> GraphStatistics {
        let degrees = || self.nodes.keys().map(|&id| self.degree(id));
        GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            density: self.density(),
            average_degree: self.average_degree(),
            max_degree: degrees().max().unwrap_or(0),
            min_degree: degrees().min().unwrap_or(0),
        }
    }

    pub fn clear_highlights(&mut self) {
        for n in self.nodes.values_mut() {
            n.annotation.clear();
        }
        for e in &mut self.edges {
            e.set_highlight(false, None);
        }
    }

    /// Removes everything and restarts id assignment at 1.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.edge_index.clear();
        self.adjacency.clear();
        self.next_id = 1;
    }

    fn sync_degree(&mut self, id: NodeId) {
        let degree = self.adjacency.neighbors(id).len();
        if let Some(node) = self.nodes.get_mut(&id) {
            node.set_connection_count(degree);
        }
    }

    fn refresh_incident_weights(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        for &n in self.adjacency.neighbors(id) {
            let Some(other) = self.nodes.get(&n) else {
                debug_assert!(false, "adjacency references a missing node");
                continue;
            };
            let Some(&idx) = self.edge_index.get(&EdgeKey::new(id, n)) else {
                debug_assert!(false, "adjacency and edge index disagree");
                continue;
            };
            self.edges[idx].set_weight(calculate_weight(node, other));
        }
    }

    fn reindex_edges_from(&mut self, start: usize) {
        for i in start..self.edges.len() {
            let key = self.edges[i].key();
            self.edge_index.insert(key, i);
        }
    }
}
