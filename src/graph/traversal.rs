//! Depth-first reachability over an [`AdjacencyMap`].
//!
//! The walk uses an explicit stack rather than recursion, so graph depth is
//! bounded by heap memory instead of the call stack.

use crate::graph::AdjacencyMap;
use std::collections::HashSet;
use std::hash::Hash;

/// An iterator for Depth-First Search (DFS).
///
/// Yields every vertex reachable from the start vertex exactly once, in the
/// same preorder a recursive walk would produce: successors are pushed in
/// reverse so the first listed successor is explored first. Visited state is
/// checked on pop, which lets self-loops and back edges fall through harmlessly.
pub struct Dfs<'a, V> {
    graph: &'a AdjacencyMap<V>,
    visited: Vec<bool>,
    stack: Vec<usize>,
    /// Set when the start vertex has no entry in the graph at all.
    detached_start: Option<&'a V>,
}

impl<'a, V: Eq + Hash + Clone> Dfs<'a, V> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// A start vertex unknown to `graph` is treated as having no successors:
    /// the iterator yields it once and stops.
    pub fn new(graph: &'a AdjacencyMap<V>, start: &'a V) -> Self {
        let mut stack = Vec::new();
        let detached_start = match graph.index_of(start) {
            Some(idx) => {
                stack.push(idx);
                None
            }
            None => Some(start),
        };

        Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            stack,
            detached_start,
        }
    }
}

impl<'a, V> Iterator for Dfs<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.detached_start.take() {
            return Some(start);
        }

        while let Some(u) = self.stack.pop() {
            if self.visited[u] {
                continue;
            }
            self.visited[u] = true;

            let graph = self.graph;
            for &v in graph.successor_indices(u).iter().rev() {
                if !self.visited[v] {
                    self.stack.push(v);
                }
            }

            return Some(graph.label(u));
        }

        None
    }
}

/// Returns the set of vertices reachable from `start`, `start` included.
///
/// Vertices without outgoing edges (or absent from `graph`) contribute no
/// successors; unreachable vertices are simply left out.
pub fn reachable_from<V: Eq + Hash + Clone>(graph: &AdjacencyMap<V>, start: &V) -> HashSet<V> {
    let visited: HashSet<V> = Dfs::new(graph, start).cloned().collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        reachable = visited.len(),
        "depth-first reachability complete"
    );

    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure_22_6() -> AdjacencyMap<char> {
        [
            ('u', vec!['v', 'x']),
            ('v', vec!['y']),
            ('w', vec!['y', 'z']),
            ('x', vec!['v']),
            ('y', vec!['x']),
            ('z', vec!['z']),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn dfs_matches_recursive_preorder() {
        let g = figure_22_6();
        let order: Vec<char> = Dfs::new(&g, &'u').copied().collect();
        assert_eq!(order, vec!['u', 'v', 'y', 'x']);

        let order: Vec<char> = Dfs::new(&g, &'w').copied().collect();
        assert_eq!(order, vec!['w', 'y', 'x', 'v', 'z']);
    }

    #[test]
    fn self_loop_terminates() {
        let g = figure_22_6();
        let reach = reachable_from(&g, &'z');
        assert_eq!(reach, HashSet::from(['z']));
    }

    #[test]
    fn sink_and_unknown_start_are_singletons() {
        let g = AdjacencyMap::from_edges([(1u32, 2u32)]);
        assert_eq!(reachable_from(&g, &2), HashSet::from([2]));
        assert_eq!(reachable_from(&g, &7), HashSet::from([7]));
        assert_eq!(Dfs::new(&g, &7).count(), 1);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let n = 200_000u32;
        let g = AdjacencyMap::from_edges((0..n - 1).map(|i| (i, i + 1)));
        assert_eq!(reachable_from(&g, &0).len(), n as usize);
    }
}
