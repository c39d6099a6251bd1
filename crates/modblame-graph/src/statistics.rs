//! Graph size summary used for progress reporting.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::Graph;

/// Snapshot of a graph's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Nodes without incoming edges
    pub root_count: usize,
    /// Nodes without outgoing edges
    pub leaf_count: usize,
}

impl fmt::Display for GraphStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} nodes, {} edges", self.node_count, self.edge_count)
    }
}

impl<T: Clone + Eq + Hash> Graph<T> {
    /// Compute a statistics snapshot.
    pub fn statistics(&self) -> GraphStatistics {
        let mut stats = GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            ..GraphStatistics::default()
        };
        for node in self.nodes() {
            if !self.has_edges_to(node) {
                stats.root_count += 1;
            }
            if !self.has_edges_from(node) {
                stats.leaf_count += 1;
            }
        }
        stats
    }
}
