//! Predecessor index over observed transitions.

use std::hash::Hash;

use fxhash::FxHashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// Directed graph with one node per observed state and one edge per
/// distinct `(state, action) -> next_state` observation.
///
/// # Invariants
///
/// - Each `(state, action, next_state)` triple appears as at most one edge
/// - Edges are never removed; a state-action pair that later led elsewhere
///   stays a predecessor of its earlier successor
///
/// # Complexity
/// - `record`: O(1) amortized plus the number of parallel edges between the
///   two states
/// - `predecessors`: O(number of predecessors)
#[derive(Debug, Clone)]
pub struct PredecessorGraph<S, A> {
    graph: DiGraph<S, A>,
    node_by_state: FxHashMap<S, NodeIndex>,
}

impl<S, A> Default for PredecessorGraph<S, A> {
    fn default() -> Self {
        Self {
            graph: DiGraph::default(),
            node_by_state: FxHashMap::default(),
        }
    }
}

impl<S, A> PredecessorGraph<S, A>
where
    S: Clone + Eq + Hash,
    A: Copy + Eq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of states seen as either source or successor.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct back-edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn node(&mut self, state: &S) -> NodeIndex {
        if let Some(&node) = self.node_by_state.get(state) {
            return node;
        }
        let node = self.graph.add_node(state.clone());
        self.node_by_state.insert(state.clone(), node);
        node
    }

    /// Records that taking `action` in `state` led to `next_state`.
    pub fn record(&mut self, state: &S, action: A, next_state: &S) {
        let from = self.node(state);
        let to = self.node(next_state);
        let known = self
            .graph
            .edges_connecting(from, to)
            .any(|edge| *edge.weight() == action);
        if !known {
            self.graph.add_edge(from, to, action);
        }
    }

    /// Iterates over the `(state, action)` pairs observed leading into
    /// `state`. Empty for a state never seen as a successor.
    pub fn predecessors<'a>(&'a self, state: &S) -> impl Iterator<Item = (&'a S, A)> + 'a {
        let node = self.node_by_state.get(state).copied();
        node.into_iter().flat_map(move |node| {
            self.graph
                .edges_directed(node, Direction::Incoming)
                .map(move |edge| (&self.graph[edge.source()], *edge.weight()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(graph: &PredecessorGraph<&'static str, u8>, s: &'static str) -> Vec<(&'static str, u8)> {
        let mut v: Vec<_> = graph.predecessors(&s).map(|(s, a)| (*s, a)).collect();
        v.sort();
        v
    }

    #[test]
    fn many_to_one_back_edges() {
        let mut g = PredecessorGraph::new();
        g.record(&"s1", 0, &"s2");
        g.record(&"s3", 1, &"s2");
        g.record(&"s1", 2, &"s2");
        assert_eq!(sorted(&g, "s2"), vec![("s1", 0), ("s1", 2), ("s3", 1)]);
        assert!(sorted(&g, "s1").is_empty());
        assert!(sorted(&g, "unseen").is_empty());
    }

    #[test]
    fn duplicate_observations_add_no_edges() {
        let mut g = PredecessorGraph::new();
        g.record(&"a", 0, &"b");
        g.record(&"a", 0, &"b");
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn self_loops_are_predecessors() {
        let mut g = PredecessorGraph::new();
        g.record(&"wall", 3, &"wall");
        assert_eq!(sorted(&g, "wall"), vec![("wall", 3)]);
    }

    #[test]
    fn edges_are_never_pruned() {
        let mut g = PredecessorGraph::new();
        g.record(&"a", 0, &"b");
        g.record(&"a", 0, &"c");
        assert_eq!(sorted(&g, "b"), vec![("a", 0)]);
        assert_eq!(sorted(&g, "c"), vec![("a", 0)]);
    }
}
