//! Graph representations and the three classical algorithms over them.
//!
//! - `adjacency`: label-keyed adjacency mapping used by traversal
//! - `edge`: weighted undirected edges for the spanning forest builder
//! - `topological`: Kahn's in-degree elimination
//! - `traversal`: explicit-stack depth-first reachability
//! - `spanning`: Kruskal's minimum spanning forest

pub mod adjacency;
pub mod edge;
mod invariant;
pub mod spanning;
pub mod topological;
pub mod traversal;

// Re-export commonly used types from submodules
pub use adjacency::AdjacencyMap;
pub use edge::WeightedEdge;
pub use spanning::{
    is_forest, minimum_spanning_forest, minimum_spanning_forest_with, SpanningForest,
};
pub use topological::{is_topological_order, topological_sort, TopologicalSorter};
pub use traversal::{reachable_from, Dfs};
