//! Minimum spanning forests by Kruskal's algorithm.
//!
//! Edges are stably sorted by weight, so equal-weight edges are considered in
//! input order and the result is deterministic. A [`DisjointSet`] tracks which
//! vertices are already connected; an edge is accepted iff it joins two
//! different components.
//!
//! Disconnected input is not an error: the result is a forest with one tree
//! per connected component.
//!
//! A deserialized [`SpanningForest`] is replayed through a fresh disjoint set
//! and rejected if an endpoint is out of range or an edge closes a cycle, so
//! `edges.len() < vertex_count` holds for every value of the type.

use crate::collections::{DisjointSet, Linking};
use crate::error::SpanningError;
use crate::graph::WeightedEdge;
use num_traits::{CheckedAdd, Zero};
use serde::{Deserialize, Serialize};

/// The edges accepted by Kruskal's algorithm, in acceptance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSpanningForest<W>")]
pub struct SpanningForest<W> {
    vertex_count: usize,
    edges: Vec<WeightedEdge<W>>,
}

/// Wire shape of [`SpanningForest`] before validation.
#[derive(Deserialize)]
struct RawSpanningForest<W> {
    vertex_count: usize,
    edges: Vec<WeightedEdge<W>>,
}

impl<W> TryFrom<RawSpanningForest<W>> for SpanningForest<W> {
    type Error = SpanningError;

    fn try_from(raw: RawSpanningForest<W>) -> Result<Self, Self::Error> {
        let mut sets = DisjointSet::new(raw.vertex_count);
        for edge in &raw.edges {
            check_endpoints(edge, raw.vertex_count)?;
            if !sets.union(edge.u, edge.v) {
                return Err(SpanningError::ClosesCycle {
                    u: edge.u,
                    v: edge.v,
                });
            }
        }

        Ok(Self {
            vertex_count: raw.vertex_count,
            edges: raw.edges,
        })
    }
}

impl<W> SpanningForest<W> {
    /// Accepted edges in acceptance (non-decreasing weight) order.
    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    /// Consumes the forest, returning its edges.
    pub fn into_edges(self) -> Vec<WeightedEdge<W>> {
        self.edges
    }

    /// Iterates the accepted edges.
    pub fn iter(&self) -> std::slice::Iter<'_, WeightedEdge<W>> {
        self.edges.iter()
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge was accepted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of vertices the forest spans.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of trees in the forest, isolated vertices included.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Returns `true` if the forest is a single tree over every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count() <= 1
    }
}

impl<W: Copy + Zero> SpanningForest<W> {
    /// Sum of the accepted edge weights.
    ///
    /// # Panics
    /// Panics in debug builds if the sum overflows `W`; see
    /// [`checked_total_weight`](Self::checked_total_weight).
    pub fn total_weight(&self) -> W {
        self.edges.iter().fold(W::zero(), |acc, e| acc + e.weight)
    }
}

impl<W: Zero + CheckedAdd> SpanningForest<W> {
    /// Sum of the accepted edge weights, or `None` on overflow.
    pub fn checked_total_weight(&self) -> Option<W> {
        self.edges
            .iter()
            .try_fold(W::zero(), |acc, e| acc.checked_add(&e.weight))
    }
}

impl<W> IntoIterator for SpanningForest<W> {
    type Item = WeightedEdge<W>;
    type IntoIter = std::vec::IntoIter<WeightedEdge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a, W> IntoIterator for &'a SpanningForest<W> {
    type Item = &'a WeightedEdge<W>;
    type IntoIter = std::slice::Iter<'a, WeightedEdge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Builds a minimum spanning forest over vertices `0..vertex_count`.
///
/// Uses [`Linking::Attach`]; see [`minimum_spanning_forest_with`] to pick the
/// union policy. The accepted edge set does not depend on the policy.
///
/// # Errors
/// Returns [`SpanningError::VertexOutOfRange`] if an edge endpoint is not in
/// `0..vertex_count`.
pub fn minimum_spanning_forest<W>(
    vertex_count: usize,
    edges: &[WeightedEdge<W>],
) -> Result<SpanningForest<W>, SpanningError>
where
    W: Ord + Copy,
{
    minimum_spanning_forest_with(vertex_count, edges, Linking::Attach)
}

/// Builds a minimum spanning forest using the given disjoint-set linking policy.
///
/// # Errors
/// Returns [`SpanningError::VertexOutOfRange`] if an edge endpoint is not in
/// `0..vertex_count`.
pub fn minimum_spanning_forest_with<W>(
    vertex_count: usize,
    edges: &[WeightedEdge<W>],
    linking: Linking,
) -> Result<SpanningForest<W>, SpanningError>
where
    W: Ord + Copy,
{
    for edge in edges {
        check_endpoints(edge, vertex_count)?;
    }

    // `sort_by_key` is stable: equal weights keep input order.
    let mut sorted: Vec<WeightedEdge<W>> = edges.to_vec();
    sorted.sort_by_key(|e| e.weight);

    let target = vertex_count.saturating_sub(1);
    let mut sets = DisjointSet::with_linking(vertex_count, linking);
    let mut accepted = Vec::with_capacity(target);

    for edge in sorted {
        if accepted.len() == target {
            break;
        }

        if sets.union(edge.u, edge.v) {
            #[cfg(feature = "tracing")]
            tracing::trace!(u = edge.u, v = edge.v, "edge accepted");
            accepted.push(edge);
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(u = edge.u, v = edge.v, "edge rejected, would close a cycle");
        }
    }

    #[cfg(debug_assertions)]
    super::invariant::invariant_assert(
        accepted.len() + sets.set_count() == vertex_count,
        "each accepted edge must merge exactly two components",
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        vertices = vertex_count,
        edges = edges.len(),
        accepted = accepted.len(),
        components = sets.set_count(),
        "spanning forest built"
    );

    Ok(SpanningForest {
        vertex_count,
        edges: accepted,
    })
}

fn check_endpoints<W>(edge: &WeightedEdge<W>, vertex_count: usize) -> Result<(), SpanningError> {
    match [edge.u, edge.v].into_iter().find(|&vertex| vertex >= vertex_count) {
        Some(vertex) => Err(SpanningError::VertexOutOfRange {
            vertex,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Returns `true` if `edges` contains no cycle over vertices `0..vertex_count`.
///
/// Replays every edge through a fresh [`DisjointSet`]; an edge whose endpoints
/// are already connected closes a cycle. Out-of-range endpoints yield `false`.
pub fn is_forest<W>(vertex_count: usize, edges: &[WeightedEdge<W>]) -> bool {
    let mut sets = DisjointSet::new(vertex_count);
    edges
        .iter()
        .all(|e| e.u < vertex_count && e.v < vertex_count && sets.union(e.u, e.v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(raw: &[(usize, usize, u32)]) -> Vec<WeightedEdge<u32>> {
        raw.iter().copied().map(WeightedEdge::from).collect()
    }

    #[test]
    fn triangle_drops_heaviest_edge() {
        let input = edges(&[(0, 1, 3), (1, 2, 1), (0, 2, 2)]);
        let forest = minimum_spanning_forest(3, &input).unwrap();

        assert_eq!(forest.edges(), &edges(&[(1, 2, 1), (0, 2, 2)])[..]);
        assert_eq!(forest.total_weight(), 3);
        assert!(forest.is_spanning_tree());
        assert!(is_forest(3, forest.edges()));
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let input = edges(&[(0, 1, 5), (1, 2, 5), (0, 2, 5)]);
        let forest = minimum_spanning_forest(3, &input).unwrap();
        assert_eq!(forest.edges(), &edges(&[(0, 1, 5), (1, 2, 5)])[..]);
    }

    #[test]
    fn disconnected_input_yields_forest() {
        let input = edges(&[(0, 1, 1), (2, 3, 4)]);
        let forest = minimum_spanning_forest(5, &input).unwrap();

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.component_count(), 3);
        assert!(!forest.is_spanning_tree());
        assert_eq!(forest.total_weight(), 5);
    }

    #[test]
    fn self_loops_are_rejected() {
        let input = edges(&[(1, 1, 0), (0, 1, 7)]);
        let forest = minimum_spanning_forest(2, &input).unwrap();
        assert_eq!(forest.into_edges(), edges(&[(0, 1, 7)]));
    }

    #[test]
    fn linking_policy_does_not_change_result() {
        let input = edges(&[(0, 1, 4), (1, 2, 2), (2, 3, 3), (3, 0, 1), (1, 3, 5)]);
        let attach = minimum_spanning_forest_with(4, &input, Linking::Attach).unwrap();
        let by_rank = minimum_spanning_forest_with(4, &input, Linking::ByRank).unwrap();
        assert_eq!(attach, by_rank);
        assert_eq!(attach.total_weight(), 6);
    }

    #[test]
    fn out_of_range_endpoint_is_an_error() {
        let input = edges(&[(0, 3, 1)]);
        assert_eq!(
            minimum_spanning_forest(3, &input).unwrap_err(),
            SpanningError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn trivial_sizes() {
        let none: Vec<WeightedEdge<u32>> = Vec::new();
        let forest = minimum_spanning_forest(0, &none).unwrap();
        assert!(forest.is_empty());
        assert!(forest.is_spanning_tree());

        let forest = minimum_spanning_forest(1, &none).unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.component_count(), 1);
    }

    #[test]
    fn checked_total_weight_reports_overflow() {
        let input: Vec<WeightedEdge<u8>> =
            vec![WeightedEdge::new(0, 1, 200), WeightedEdge::new(1, 2, 100)];
        let forest = minimum_spanning_forest(3, &input).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.checked_total_weight(), None);

        let input: Vec<WeightedEdge<u8>> =
            vec![WeightedEdge::new(0, 1, 200), WeightedEdge::new(1, 2, 55)];
        let forest = minimum_spanning_forest(3, &input).unwrap();
        assert_eq!(forest.checked_total_weight(), Some(255));
        assert_eq!(forest.total_weight(), 255);
    }

    #[test]
    fn forest_checker_detects_cycles() {
        assert!(is_forest(3, &edges(&[(0, 1, 1), (1, 2, 1)])));
        assert!(!is_forest(3, &edges(&[(0, 1, 1), (1, 2, 1), (2, 0, 1)])));
        assert!(!is_forest(2, &edges(&[(0, 2, 1)])));
    }
}
