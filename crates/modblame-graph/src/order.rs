//! Deterministic node and edge emission order for rendering.
//!
//! Diagram layout engines tend to place nodes in the order they are declared.
//! [`EmissionOrder`] peels the graph from its roots: each round declares every
//! current root (sorted), then removes their outgoing edges one dependency at
//! a time (sorted), recording each edge under its destination. A dependency
//! left without edges is declared immediately as a leaf. When only cycles
//! remain, the smallest node with outgoing edges is used as a pseudo-root; it
//! is declared once its last edge goes away.
//!
//! Rendering each declared node followed by its recorded incoming edges makes
//! the diagram flow from roots to leaves.

use std::hash::Hash;

use crate::{Graph, Multimap, Set};

#[derive(Debug, Clone)]
pub struct EmissionOrder<T> {
    nodes: Vec<T>,
    edges_by_to: Multimap<T, T>,
}

impl<T: Clone + Eq + Hash + Ord> EmissionOrder<T> {
    /// Consume `graph`, computing the emission order of its nodes and edges.
    pub fn from_graph(mut graph: Graph<T>) -> Self {
        let mut nodes = Vec::with_capacity(graph.node_count());
        let mut emitted = Set::new();
        let mut edges_by_to = Multimap::new();

        let mut emit = |node: &T, nodes: &mut Vec<T>| {
            if emitted.insert(node.clone()) {
                nodes.push(node.clone());
            }
        };

        while !graph.is_empty() {
            let mut sources = graph.root_nodes();
            if sources.is_empty() {
                sources.extend(
                    graph
                        .nodes()
                        .filter(|node| graph.has_edges_from(node))
                        .min()
                        .cloned(),
                );
            } else {
                sources.sort_unstable();
                for root in &sources {
                    emit(root, &mut nodes);
                }
            }

            for module in sources {
                let mut dependencies = graph.edges_from(&module);
                dependencies.sort_unstable();
                for dependency in dependencies {
                    edges_by_to.insert(dependency.clone(), module.clone());
                    graph.remove(&module, &dependency);
                    if !graph.contains_node(&dependency) {
                        emit(&dependency, &mut nodes);
                    }
                }
                if !graph.contains_node(&module) {
                    emit(&module, &mut nodes);
                }
            }
        }

        Self { nodes, edges_by_to }
    }

    /// Nodes in declaration order. Every node of the source graph appears once.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Sources of the edges into `node`, sorted.
    pub fn incoming(&self, node: &T) -> Vec<T> {
        let mut sources = self.edges_by_to.values(node);
        sources.sort_unstable();
        sources
    }

    pub fn edge_count(&self) -> usize {
        self.edges_by_to.len()
    }
}
