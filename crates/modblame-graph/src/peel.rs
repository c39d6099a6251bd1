//! Cycle isolation by peeling roots and leaves.
//!
//! Repeatedly strips the outgoing edges of any root and the incoming edges of
//! any leaf until neither exists. Whatever survives lies on at least one
//! cycle: every remaining node has both incoming and outgoing edges. The
//! remainder is not split into separate strongly connected components.

use std::hash::Hash;

use tracing::debug;

use crate::Graph;

/// Drop every node and edge that is not part of a cycle.
pub fn retain_cycles<T: Clone + Eq + Hash>(graph: &mut Graph<T>) {
    let before = (graph.node_count(), graph.edge_count());
    let mut passes = 0usize;

    loop {
        passes += 1;
        if let Some(root) = graph.find_root_node() {
            for to in graph.edges_from(&root) {
                graph.remove(&root, &to);
            }
            continue;
        }
        if let Some(leaf) = graph.find_leaf_node() {
            for from in graph.edges_to(&leaf) {
                graph.remove(&from, &leaf);
            }
            continue;
        }
        break;
    }

    debug!(
        passes,
        removed_nodes = before.0 - graph.node_count(),
        removed_edges = before.1 - graph.edge_count(),
        "peeled acyclic nodes"
    );
}
