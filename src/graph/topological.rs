//! Topological ordering by in-degree elimination (Kahn's algorithm).
//!
//! The sorter does **not** assume acyclicity on construction; instead `sort`
//! returns [`SortError::Cycle`] when no valid ordering exists.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `new` | \(O(n + m)\) | Interns labels, builds successor lists |
//! | `sort` | \(O(n + m)\) | FIFO ready queue |
//! | `sort_lexical` | \(O((n + m) \log n)\) | Min-heap ready set |

use crate::error::SortError;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// The set of vertices whose in-degree has dropped to zero.
///
/// The pop order of this set is the only thing that distinguishes one valid
/// ordering from another.
trait ReadySet {
    fn push(&mut self, idx: usize);
    fn pop(&mut self) -> Option<usize>;
}

/// Ties resolved by the caller's vertex enumeration order.
impl ReadySet for VecDeque<usize> {
    fn push(&mut self, idx: usize) {
        self.push_back(idx);
    }

    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Ties resolved by the smallest vertex under `Ord`.
struct LexicalReady<'r> {
    rank: &'r [usize],
    heap: BinaryHeap<Reverse<(usize, usize)>>,
}

impl ReadySet for LexicalReady<'_> {
    fn push(&mut self, idx: usize) {
        self.heap.push(Reverse((self.rank[idx], idx)));
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, idx))| idx)
    }
}

/// A validated directed graph ready for topological ordering.
///
/// Vertices keep the order in which the caller enumerated them; that order is
/// what [`sort`](Self::sort) uses to break ties between simultaneously ready
/// vertices.
#[derive(Debug, Clone)]
pub struct TopologicalSorter<V> {
    vertices: Vec<V>,
    successors: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

impl<V: Eq + Hash + Clone> TopologicalSorter<V> {
    /// Validates `vertices` and `edges` and builds the successor lists.
    ///
    /// Each edge `(u, v)` means `u` must precede `v`.
    ///
    /// # Errors
    /// - [`SortError::DuplicateVertex`] if a vertex is enumerated twice.
    /// - [`SortError::UnknownVertex`] if an edge endpoint is not enumerated.
    pub fn new<I, E>(vertices: I, edges: E) -> Result<Self, SortError<V>>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let mut index = HashMap::with_capacity(vertices.len());
        for (idx, vertex) in vertices.iter().enumerate() {
            if index.insert(vertex.clone(), idx).is_some() {
                return Err(SortError::DuplicateVertex(vertex.clone()));
            }
        }

        let n = vertices.len();
        let mut successors = vec![Vec::new(); n];
        let mut in_degree = vec![0usize; n];
        let mut edge_count = 0;
        for (from, to) in edges {
            let u = *index.get(&from).ok_or(SortError::UnknownVertex(from))?;
            let v = *index.get(&to).ok_or(SortError::UnknownVertex(to))?;
            successors[u].push(v);
            in_degree[v] += 1;
            edge_count += 1;
        }

        Ok(Self {
            vertices,
            successors,
            in_degree,
            edge_count,
        })
    }

    /// Computes a topological ordering, breaking ties by enumeration order.
    ///
    /// # Errors
    /// Returns [`SortError::Cycle`] if the graph contains a cycle.
    pub fn sort(&self) -> Result<Vec<V>, SortError<V>> {
        let outcome = self.eliminate(VecDeque::with_capacity(self.vertices.len()));
        self.finish(outcome)
    }

    /// Checks if the graph is acyclic by attempting elimination.
    pub fn is_acyclic(&self) -> bool {
        self.eliminate(VecDeque::new()).is_ok()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Runs elimination with the given ready set.
    ///
    /// Returns the vertex indices in order on success, or the indices left
    /// with a non-zero in-degree when elimination stalls.
    fn eliminate<R: ReadySet>(&self, mut ready: R) -> Result<Vec<usize>, Vec<usize>> {
        let n = self.vertices.len();
        let mut indeg = self.in_degree.clone();

        for (u, &d) in indeg.iter().enumerate() {
            if d == 0 {
                ready.push(u);
            }
        }

        let mut order = Vec::with_capacity(n);
        while let Some(u) = ready.pop() {
            order.push(u);

            // Reduce in-degrees of successors
            for &v in &self.successors[u] {
                indeg[v] -= 1;
                if indeg[v] == 0 {
                    ready.push(v);
                }
            }
        }

        if order.len() == n {
            #[cfg(debug_assertions)]
            super::invariant::invariant_assert(
                self.is_forward_order(&order),
                "every edge must point forward in the elimination order",
            );
            Ok(order)
        } else {
            Err((0..n).filter(|&u| indeg[u] > 0).collect())
        }
    }

    fn finish(&self, outcome: Result<Vec<usize>, Vec<usize>>) -> Result<Vec<V>, SortError<V>> {
        let labels = |indices: Vec<usize>| -> Vec<V> {
            indices.into_iter().map(|i| self.vertices[i].clone()).collect()
        };

        match outcome {
            Ok(order) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    vertices = self.vertices.len(),
                    edges = self.edge_count,
                    "topological order computed"
                );
                Ok(labels(order))
            }
            Err(remaining) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    vertices = self.vertices.len(),
                    edges = self.edge_count,
                    unordered = remaining.len(),
                    "cycle detected, no topological order"
                );
                Err(SortError::Cycle {
                    remaining: labels(remaining),
                })
            }
        }
    }

    #[cfg(debug_assertions)]
    fn is_forward_order(&self, order: &[usize]) -> bool {
        let mut pos = vec![usize::MAX; self.vertices.len()];
        for (p, &u) in order.iter().enumerate() {
            if pos[u] != usize::MAX {
                return false;
            }
            pos[u] = p;
        }
        self.successors
            .iter()
            .enumerate()
            .all(|(u, succ)| succ.iter().all(|&v| pos[u] < pos[v]))
    }
}

impl<V: Eq + Hash + Clone + Ord> TopologicalSorter<V> {
    /// Computes the lexicographically smallest topological ordering.
    ///
    /// Among simultaneously ready vertices the smallest under `Ord` is
    /// emitted first, so the result does not depend on enumeration order.
    ///
    /// # Errors
    /// Returns [`SortError::Cycle`] if the graph contains a cycle.
    pub fn sort_lexical(&self) -> Result<Vec<V>, SortError<V>> {
        let mut by_label: Vec<usize> = (0..self.vertices.len()).collect();
        by_label.sort_by(|&a, &b| self.vertices[a].cmp(&self.vertices[b]));
        let mut rank = vec![0usize; by_label.len()];
        for (r, &idx) in by_label.iter().enumerate() {
            rank[idx] = r;
        }

        let ready = LexicalReady {
            rank: &rank,
            heap: BinaryHeap::with_capacity(rank.len()),
        };
        let outcome = self.eliminate(ready);
        self.finish(outcome)
    }
}

/// Orders `vertices` so that for every edge `(u, v)`, `u` comes before `v`.
///
/// Ties between vertices that become ready together follow the order in
/// which `vertices` enumerates them. An empty vertex set yields an empty
/// ordering.
///
/// # Errors
/// - [`SortError::Cycle`] if no valid ordering exists.
/// - [`SortError::UnknownVertex`] / [`SortError::DuplicateVertex`] on malformed input.
pub fn topological_sort<V, I, E>(vertices: I, edges: E) -> Result<Vec<V>, SortError<V>>
where
    V: Eq + Hash + Clone,
    I: IntoIterator<Item = V>,
    E: IntoIterator<Item = (V, V)>,
{
    TopologicalSorter::new(vertices, edges)?.sort()
}

/// Returns `true` if `order` is a permutation of `vertices` in which every
/// edge `(u, v)` has `u` strictly before `v`.
pub fn is_topological_order<V: Eq + Hash>(
    order: &[V],
    vertices: &[V],
    edges: &[(V, V)],
) -> bool {
    if order.len() != vertices.len() {
        return false;
    }

    let mut pos = HashMap::with_capacity(order.len());
    for (p, v) in order.iter().enumerate() {
        if pos.insert(v, p).is_some() {
            return false;
        }
    }

    let expected: HashSet<&V> = vertices.iter().collect();
    if expected.len() != vertices.len() || !order.iter().all(|v| expected.contains(v)) {
        return false;
    }

    edges
        .iter()
        .all(|(u, v)| matches!((pos.get(u), pos.get(v)), (Some(pu), Some(pv)) if pu < pv))
}
