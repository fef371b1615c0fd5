//! Edge entity and its unordered key.
//!
//! Edges store endpoint ids only; node state is always looked up through the owning
//! [`Graph`](crate::Graph).

use crate::node::{NodeId, Rgb};
use crate::weight::cost_from_weight;

/// Canonical unordered endpoint pair: `EdgeKey::new(a, b) == EdgeKey::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    lo: NodeId,
    hi: NodeId,
}

impl EdgeKey {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn endpoints(self) -> (NodeId, NodeId) {
        (self.lo, self.hi)
    }

    pub fn contains(self, id: NodeId) -> bool {
        self.lo == id || self.hi == id
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    weight: f64,
    pub highlighted: bool,
    pub highlight_color: Option<Rgb>,
}

impl Edge {
    pub(crate) fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
            highlighted: false,
            highlight_color: None,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source, self.target)
    }

    /// Similarity weight in `(0, 1]`.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Traversal cost used by the pathfinding algorithms: `1 / weight`.
    pub fn cost(&self) -> f64 {
        cost_from_weight(self.weight)
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }

    /// The opposite endpoint, or `None` when `id` is not on this edge.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if id == self.source {
            Some(self.target)
        } else if id == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    pub fn set_highlight(&mut self, highlighted: bool, color: Option<Rgb>) {
        self.highlighted = highlighted;
        self.highlight_color = if highlighted { color } else { None };
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}
