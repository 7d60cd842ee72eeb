//! Collections backing the graph algorithms.
//!
//! - `disjoint_set`: array-of-parents union-find used by the spanning forest builder

pub mod disjoint_set;

pub use disjoint_set::{DisjointSet, Linking};
