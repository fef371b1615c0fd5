//! Adjacency cache used by [`Graph`](super::Graph).
//!
//! Each node maps to its neighbour ids in the order the connecting edges were added. The cache is
//! updated eagerly by every structural mutation, so reads never rebuild it.

use crate::node::NodeId;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct AdjacencyCache {
    lists: FxHashMap<NodeId, Vec<NodeId>>,
}

impl AdjacencyCache {
    pub(in crate::graph) fn insert_node(&mut self, id: NodeId) {
        self.lists.entry(id).or_default();
    }

    /// Drops `id` and scrubs it from every former neighbour's list. Returns the former
    /// neighbours in adjacency order.
    pub(in crate::graph) fn remove_node(&mut self, id: NodeId) -> Vec<NodeId> {
        let former = self.lists.remove(&id).unwrap_or_default();
        for n in &former {
            if let Some(list) = self.lists.get_mut(n) {
                list.retain(|&x| x != id);
            }
        }
        former
    }

    pub(in crate::graph) fn link(&mut self, a: NodeId, b: NodeId) {
        self.lists.entry(a).or_default().push(b);
        self.lists.entry(b).or_default().push(a);
    }

    pub(in crate::graph) fn unlink(&mut self, a: NodeId, b: NodeId) {
        if let Some(list) = self.lists.get_mut(&a) {
            list.retain(|&x| x != b);
        }
        if let Some(list) = self.lists.get_mut(&b) {
            list.retain(|&x| x != a);
        }
    }

    pub(in crate::graph) fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.lists.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(in crate::graph) fn contains(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub(in crate::graph) fn clear(&mut self) {
        self.lists.clear();
    }
}
