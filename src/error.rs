//! Error types returned by the graph algorithms.
//!
//! Cycle detection and malformed input are ordinary outcomes, so they are
//! reported through `Result` rather than panics.

use core::fmt;

/// The error type for [`topological_sort`](crate::graph::topological_sort) and
/// [`TopologicalSorter`](crate::graph::TopologicalSorter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError<V> {
    /// The graph contains a cycle, so no valid ordering exists.
    ///
    /// `remaining` lists every vertex that could not be ordered (vertices on a
    /// cycle or downstream of one), in the caller's enumeration order.
    Cycle {
        /// Vertices left with a non-zero in-degree once elimination stalled.
        remaining: Vec<V>,
    },
    /// An edge endpoint is missing from the vertex collection.
    UnknownVertex(V),
    /// The same vertex was listed more than once.
    DuplicateVertex(V),
}

impl<V> SortError<V> {
    /// Returns `true` if this error reports a cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }
}

impl<V: fmt::Debug> fmt::Display for SortError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle { remaining } => write!(
                f,
                "graph contains a cycle; {} vertices could not be ordered",
                remaining.len()
            ),
            Self::UnknownVertex(v) => write!(f, "edge references unknown vertex {v:?}"),
            Self::DuplicateVertex(v) => write!(f, "vertex {v:?} is listed more than once"),
        }
    }
}

impl<V: fmt::Debug> std::error::Error for SortError<V> {}

/// The error type for [`minimum_spanning_forest`](crate::graph::minimum_spanning_forest)
/// and for deserializing a [`SpanningForest`](crate::graph::SpanningForest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanningError {
    /// An edge endpoint is not in `0..vertex_count`.
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// The number of vertices the forest was built over.
        vertex_count: usize,
    },
    /// A forest edge joins two vertices that are already connected.
    ClosesCycle {
        /// First endpoint of the offending edge.
        u: usize,
        /// Second endpoint of the offending edge.
        v: usize,
    },
}

impl fmt::Display for SpanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(
                f,
                "edge endpoint {vertex} is out of range for {vertex_count} vertices"
            ),
            Self::ClosesCycle { u, v } => write!(f, "edge ({u}, {v}) closes a cycle"),
        }
    }
}

impl std::error::Error for SpanningError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err: SortError<&str> = SortError::Cycle {
            remaining: vec!["a", "b", "c"],
        };
        assert!(err.is_cycle());
        assert_eq!(
            err.to_string(),
            "graph contains a cycle; 3 vertices could not be ordered"
        );

        let err = SortError::UnknownVertex("hat");
        assert!(!err.is_cycle());
        assert_eq!(err.to_string(), "edge references unknown vertex \"hat\"");

        let err = SpanningError::VertexOutOfRange {
            vertex: 9,
            vertex_count: 9,
        };
        assert_eq!(
            err.to_string(),
            "edge endpoint 9 is out of range for 9 vertices"
        );

        let err = SpanningError::ClosesCycle { u: 0, v: 0 };
        assert_eq!(err.to_string(), "edge (0, 0) closes a cycle");
    }
}
