//! Derivations that build a new [`Graph`] from an existing one.
//!
//! None of these mutate the receiver. Predicates must be pure functions of
//! the node identity; they may be called more than once for the same node.

use std::hash::Hash;

use rustc_hash::FxHashMap as HashMap;

use super::Graph;
use crate::multimap::Multimap;
use crate::set::Set;

impl<T: Clone + Eq + Hash> Graph<T> {
    /// Rename every node through `rename`.
    ///
    /// Nodes that collapse onto the same identity have their edges merged,
    /// and duplicate renamed edges collapse into one. An edge between two
    /// nodes that collapse together becomes a self-loop.
    pub fn map<U, F>(&self, mut rename: F) -> Graph<U>
    where
        U: Clone + Eq + Hash,
        F: FnMut(&T) -> U,
    {
        let mut renamed: HashMap<&T, U> = HashMap::default();
        let mut mapped = Graph::new();

        for (from, to) in self.edges() {
            let from = renamed.entry(from).or_insert_with(|| rename(from)).clone();
            let to = renamed.entry(to).or_insert_with(|| rename(to)).clone();
            mapped.add(from, to);
        }

        mapped
    }

    /// A copy of this graph with every edge reversed.
    pub fn inverse(&self) -> Self {
        self.clone().into_inverse()
    }

    /// Reverse every edge in place by swapping the adjacency structures.
    pub fn into_inverse(self) -> Self {
        Self {
            forward: self.reverse,
            reverse: self.forward,
            nodes: self.nodes,
        }
    }

    /// Everything reachable from the nodes matching `predicate`.
    ///
    /// Seeds are the matching nodes that have outgoing edges. Every edge
    /// traversed from a seed is copied into the result exactly once; nodes not
    /// reachable from any seed are absent.
    pub fn subgraph_from<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let mut stack: Vec<T> = self
            .forward
            .keys()
            .filter(|&node| predicate(node))
            .cloned()
            .collect();

        let mut subgraph = Self::new();
        let mut visited = Set::new();

        while let Some(from) = stack.pop() {
            if !visited.insert(from.clone()) {
                continue;
            }
            let Some(targets) = self.forward.get(&from) else {
                continue;
            };
            for to in targets {
                subgraph.add(from.clone(), to.clone());
                if !visited.contains(to) {
                    stack.push(to.clone());
                }
            }
        }

        subgraph
    }

    /// Everything that can reach a node matching `predicate`.
    pub fn subgraph_to<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.inverse().subgraph_from(predicate).into_inverse()
    }

    /// Paths from the root nodes up to the first node matching `predicate`.
    ///
    /// The walk starts at every root and does not expand past a matching
    /// node. An edge `(a, b)` is kept when `b` matches or when some kept edge
    /// leaves `b`, so branches that never reach a match are dropped even
    /// though they were visited.
    pub fn subgraph_until<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let mut stack = self.root_nodes();
        let mut visited = Set::new();
        let mut matched = Set::new();
        let mut candidates: Vec<(T, T)> = Vec::new();

        while let Some(from) = stack.pop() {
            if !visited.insert(from.clone()) {
                continue;
            }
            if predicate(&from) {
                matched.insert(from);
                continue;
            }
            let Some(targets) = self.forward.get(&from) else {
                continue;
            };
            for to in targets {
                candidates.push((from.clone(), to.clone()));
                if !visited.contains(to) {
                    stack.push(to.clone());
                }
            }
        }

        // Propagate "reaches a match" backwards over the candidate edges.
        let dependents: Multimap<T, T> = candidates
            .iter()
            .map(|(from, to)| (to.clone(), from.clone()))
            .collect();
        let mut contributing = matched.clone();
        let mut pending = matched.to_vec();
        while let Some(node) = pending.pop() {
            let Some(sources) = dependents.get(&node) else {
                continue;
            };
            for source in sources {
                if contributing.insert(source.clone()) {
                    pending.push(source.clone());
                }
            }
        }

        candidates
            .into_iter()
            .filter(|(_, to)| contributing.contains(to))
            .collect()
    }

    /// Whether a directed path of at least one edge leads from `from` to `to`.
    pub fn depends_on(&self, from: &T, to: &T) -> bool {
        let mut stack = self.edges_from(from);
        let mut visited = Set::new();

        while let Some(node) = stack.pop() {
            if node == *to {
                return true;
            }
            if !visited.insert(node.clone()) {
                continue;
            }
            if let Some(targets) = self.forward.get(&node) {
                stack.extend(targets.iter().filter(|t| !visited.contains(t)).cloned());
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
        edges.iter().copied().collect()
    }

    fn sorted_edges(g: &Graph<&'static str>) -> Vec<(&'static str, &'static str)> {
        let mut edges: Vec<_> = g.edges().map(|(a, b)| (*a, *b)).collect();
        edges.sort_unstable();
        edges
    }

    #[test]
    fn test_map_coalesces_versions() {
        let g = graph(&[("a@v1", "b"), ("a@v2", "b")]);
        let mapped = g.map(|m| m.split_once('@').map_or(*m, |(name, _)| name).to_string());

        assert_eq!(mapped.edge_count(), 1);
        assert_eq!(mapped.node_count(), 2);
        assert!(mapped.contains_edge(&"a".to_string(), &"b".to_string()));
    }

    #[test]
    fn test_map_collapse_creates_self_loop() {
        let g = graph(&[("a@v1", "a@v2")]);
        let mapped = g.map(|m| {
            let m: &'static str = *m;
            m.split_once('@').map_or(m, |(name, _)| name)
        });

        assert_eq!(sorted_edges(&mapped), vec![("a", "a")]);
    }

    #[test]
    fn test_map_leaves_source_untouched() {
        let g = graph(&[("a", "b")]);
        let _ = g.map(|m| m.len());
        assert_eq!(sorted_edges(&g), vec![("a", "b")]);
    }

    #[test]
    fn test_inverse_reverses_edges() {
        let g = graph(&[("a", "b"), ("b", "c")]);
        let inverse = g.inverse();

        assert_eq!(sorted_edges(&inverse), vec![("b", "a"), ("c", "b")]);
        assert_eq!(inverse.root_nodes(), vec!["c"]);
        assert_eq!(inverse.leaf_nodes(), vec!["a"]);
        assert_eq!(inverse.inverse(), g);
    }

    #[test]
    fn test_subgraph_from_excludes_predecessors() {
        let g = graph(&[("A", "B"), ("B", "C")]);
        let sub = g.subgraph_from(|n| n.contains('B'));

        assert_eq!(sorted_edges(&sub), vec![("B", "C")]);
        assert!(!sub.contains_node(&"A"));
    }

    #[test]
    fn test_subgraph_from_follows_cycles_once() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("x", "y")]);
        let sub = g.subgraph_from(|n| *n == "a");

        assert_eq!(
            sorted_edges(&sub),
            vec![("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]
        );
    }

    #[test]
    fn test_subgraph_from_leaf_seed_is_empty() {
        let g = graph(&[("a", "b")]);
        assert!(g.subgraph_from(|n| *n == "b").is_empty());
    }

    #[test]
    fn test_subgraph_to_includes_all_dependents() {
        let g = graph(&[("a", "b"), ("b", "c"), ("d", "c"), ("c", "e")]);
        let sub = g.subgraph_to(|n| *n == "c");

        assert_eq!(sorted_edges(&sub), vec![("a", "b"), ("b", "c"), ("d", "c")]);
    }

    #[test]
    fn test_subgraph_until_stops_at_match() {
        let g = graph(&[("root", "mid"), ("mid", "target"), ("target", "deep")]);
        let sub = g.subgraph_until(|n| *n == "target");

        assert_eq!(sorted_edges(&sub), vec![("mid", "target"), ("root", "mid")]);
    }

    #[test]
    fn test_subgraph_until_drops_dead_branches() {
        let g = graph(&[
            ("root", "a"),
            ("root", "dead"),
            ("dead", "leaf"),
            ("a", "target"),
        ]);
        let sub = g.subgraph_until(|n| *n == "target");

        assert_eq!(sorted_edges(&sub), vec![("a", "target"), ("root", "a")]);
    }

    #[test]
    fn test_subgraph_until_keeps_cycle_leading_to_match() {
        let g = graph(&[("r", "a"), ("a", "b"), ("b", "a"), ("b", "m")]);
        let sub = g.subgraph_until(|n| *n == "m");

        assert_eq!(
            sorted_edges(&sub),
            vec![("a", "b"), ("b", "a"), ("b", "m"), ("r", "a")]
        );
    }

    #[test]
    fn test_subgraph_until_ignores_rootless_graph() {
        let g = graph(&[("a", "b"), ("b", "a")]);
        assert!(g.subgraph_until(|n| *n == "b").is_empty());
    }

    #[test]
    fn test_subgraph_until_matching_root_yields_nothing() {
        let g = graph(&[("a", "b")]);
        assert!(g.subgraph_until(|n| *n == "a").is_empty());
    }

    #[test]
    fn test_depends_on_transitive() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "b")]);

        assert!(g.depends_on(&"a", &"b"));
        assert!(g.depends_on(&"a", &"c"));
        assert!(g.depends_on(&"b", &"b"));
        assert!(!g.depends_on(&"c", &"a"));
        assert!(!g.depends_on(&"a", &"a"));
        assert!(!g.depends_on(&"missing", &"a"));
    }
}
