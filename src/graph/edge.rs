//! Weighted undirected edges.

use serde::{Deserialize, Serialize};

/// An undirected edge `{u, v}` carrying a totally ordered weight.
///
/// Endpoints are dense vertex indices in `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge<W> {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
    /// Edge weight.
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    /// Creates a new edge.
    pub const fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// The endpoints as an `(u, v)` pair.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.u, self.v)
    }
}

impl<W> From<(usize, usize, W)> for WeightedEdge<W> {
    fn from((u, v, weight): (usize, usize, W)) -> Self {
        Self::new(u, v, weight)
    }
}

impl<W> From<WeightedEdge<W>> for (usize, usize, W) {
    fn from(edge: WeightedEdge<W>) -> Self {
        (edge.u, edge.v, edge.weight)
    }
}
