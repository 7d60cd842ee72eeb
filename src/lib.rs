//! # `classic-graphs` - Textbook Graph Algorithms
//!
//! Three independent, stateless graph algorithms with explicit result types:
//!
//! - **Topological ordering** ([`topological_sort`]): Kahn's in-degree
//!   elimination. A cyclic graph is an ordinary [`SortError::Cycle`] outcome.
//! - **Reachability** ([`reachable_from`]): depth-first traversal with an
//!   explicit stack; self-loops and back edges are absorbed by the visited check.
//! - **Minimum spanning forest** ([`minimum_spanning_forest`]): Kruskal's
//!   algorithm over a path-halving [`DisjointSet`]. Disconnected input yields a
//!   forest, not an error.
//!
//! The [`samples`] module bundles the textbook inputs the algorithms are
//! usually demonstrated on.
//!
//! ## Example
//!
//! ```rust
//! use classic_graphs::{minimum_spanning_forest, reachable_from, samples, topological_sort};
//!
//! let (garments, constraints) = samples::getting_dressed();
//! let order = topological_sort(garments, constraints).unwrap();
//! let pos = |g: &str| order.iter().position(|&x| x == g).unwrap();
//! assert!(pos("socks") < pos("shoes"));
//!
//! let graph = samples::figure_22_6();
//! assert_eq!(reachable_from(&graph, &'u').len(), 4);
//!
//! let (n, edges) = samples::figure_23_4();
//! let mst = minimum_spanning_forest(n, &edges).unwrap();
//! assert_eq!(mst.total_weight(), 37);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug`/`trace` events from each algorithm.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod samples;

pub use collections::{DisjointSet, Linking};
pub use error::{SortError, SpanningError};
pub use graph::{
    is_forest, is_topological_order, minimum_spanning_forest, minimum_spanning_forest_with,
    reachable_from, topological_sort, AdjacencyMap, Dfs, SpanningForest, TopologicalSorter,
    WeightedEdge,
};
