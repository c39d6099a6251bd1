//! Directed graph over opaque node identities.
//!
//! A [`Graph`] stores every edge twice, once in a forward adjacency
//! (`from -> {to}`) and once in a reverse adjacency (`to -> {from}`), plus an
//! explicit node set. The three structures are kept consistent by
//! [`Graph::add`] and [`Graph::remove`], the only mutators:
//!
//! - every endpoint of an edge is in the node set,
//! - `b ∈ forward(a)` exactly when `a ∈ reverse(b)`,
//! - a node without any incoming or outgoing edge is not in the node set.
//!
//! Derivations (`map`, `inverse`, `subgraph_*`) live in [`traversal`] and
//! always return a fresh graph.
//!
//! Iteration order over nodes and edges is unspecified. Use
//! [`crate::EmissionOrder`] when a stable order is needed.

mod traversal;

use std::hash::Hash;

use crate::multimap::Multimap;
use crate::set::Set;

#[derive(Debug, Clone)]
pub struct Graph<T> {
    forward: Multimap<T, T>,
    reverse: Multimap<T, T>,
    nodes: Set<T>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            forward: Multimap::default(),
            reverse: Multimap::default(),
            nodes: Set::default(),
        }
    }
}

impl<T: Clone + Eq + Hash> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add the edge `from -> to`. Returns `false` if it already existed.
    pub fn add(&mut self, from: T, to: T) -> bool {
        if self.forward.contains(&from, &to) {
            return false;
        }
        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());
        self.reverse.insert(to.clone(), from.clone());
        self.forward.insert(from, to);
        true
    }

    /// Remove the edge `from -> to`, dropping endpoints left without edges.
    /// Returns `false` if the edge did not exist.
    pub fn remove(&mut self, from: &T, to: &T) -> bool {
        if !self.forward.remove(from, to) {
            return false;
        }
        self.reverse.remove(to, from);
        self.forget_if_detached(from);
        self.forget_if_detached(to);
        true
    }

    fn forget_if_detached(&mut self, node: &T) {
        if !self.has_edges_from(node) && !self.has_edges_to(node) {
            self.nodes.remove(node);
        }
    }

    pub fn contains_node(&self, node: &T) -> bool {
        self.nodes.contains(node)
    }

    pub fn contains_edge(&self, from: &T, to: &T) -> bool {
        self.forward.contains(from, to)
    }

    pub fn has_edges_from(&self, node: &T) -> bool {
        self.forward.contains_key(node)
    }

    pub fn has_edges_to(&self, node: &T) -> bool {
        self.reverse.contains_key(node)
    }

    /// Direct dependencies of `node`.
    pub fn edges_from(&self, node: &T) -> Vec<T> {
        self.forward.values(node)
    }

    /// Direct dependents of `node`.
    pub fn edges_to(&self, node: &T) -> Vec<T> {
        self.reverse.values(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter()
    }

    /// Every edge as a `(from, to)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> {
        self.forward.iter()
    }

    /// An arbitrary node, or `None` for an empty graph.
    pub fn any_node(&self) -> Option<T> {
        self.nodes.any().cloned()
    }

    /// Nodes nothing depends on.
    pub fn root_nodes(&self) -> Vec<T> {
        self.nodes
            .iter()
            .filter(|node| !self.has_edges_to(node))
            .cloned()
            .collect()
    }

    /// Nodes that depend on nothing.
    pub fn leaf_nodes(&self) -> Vec<T> {
        self.nodes
            .iter()
            .filter(|node| !self.has_edges_from(node))
            .cloned()
            .collect()
    }

    pub fn find_root_node(&self) -> Option<T> {
        self.find_from(|node| !self.has_edges_to(node))
    }

    pub fn find_leaf_node(&self) -> Option<T> {
        self.find_to(|node| !self.has_edges_from(node))
    }

    /// First node with outgoing edges that satisfies `predicate`.
    pub fn find_from<F>(&self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.forward.keys().find(|&node| predicate(node)).cloned()
    }

    /// First node with incoming edges that satisfies `predicate`.
    pub fn find_to<F>(&self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.reverse.keys().find(|&node| predicate(node)).cloned()
    }
}

impl<T: Clone + Eq + Hash> PartialEq for Graph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward && self.nodes == other.nodes
    }
}

impl<T: Clone + Eq + Hash> Eq for Graph<T> {}

impl<T: Clone + Eq + Hash> Extend<(T, T)> for Graph<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add(from, to);
        }
    }
}

impl<T: Clone + Eq + Hash> FromIterator<(T, T)> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
