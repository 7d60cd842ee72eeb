//! A label-keyed directed adjacency mapping.
//!
//! Vertices are arbitrary hashable labels. Internally each label is interned to
//! a dense index so traversals can keep their visited state in a `Vec<bool>`
//! instead of hashing on every step. Both the vertex order and the order of
//! each successor list follow insertion order.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Interns the label |
//! | `add_edge` | \(O(1)\) amortized | Interns both endpoints |
//! | `successors` | \(O(1)\) + iteration | Empty for unknown labels |

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

/// A directed graph stored as vertex → ordered successor list.
#[derive(Debug, Clone)]
pub struct AdjacencyMap<V> {
    labels: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<V> AdjacencyMap<V> {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of directed edges (parallel edges and self-loops included).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the map holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.labels.iter()
    }

    /// Iterates `(vertex, successors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Vec<&V>)> + '_ {
        self.labels
            .iter()
            .zip(&self.adjacency)
            .map(move |(v, succ)| (v, succ.iter().map(|&s| &self.labels[s]).collect()))
    }

    pub(crate) fn label(&self, idx: usize) -> &V {
        &self.labels[idx]
    }

    pub(crate) fn successor_indices(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }
}

impl<V: Eq + Hash + Clone> AdjacencyMap<V> {
    /// Creates an empty adjacency map.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty adjacency map with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Builds a map from directed `(from, to)` pairs.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Adds `vertex` if absent and returns its dense index.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.labels.len();
        self.index.insert(vertex.clone(), idx);
        self.labels.push(vertex);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Appends `to` to the successor list of `from`, adding either vertex if absent.
    pub fn add_edge(&mut self, from: V, to: V) {
        let u = self.add_vertex(from);
        let v = self.add_vertex(to);
        self.adjacency[u].push(v);
        self.edge_count += 1;
    }

    /// Returns `true` if `vertex` has been added.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Successors of `vertex` in insertion order. Unknown vertices have none.
    pub fn successors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        let succ: &'a [usize] = match self.index.get(vertex) {
            Some(&idx) => &self.adjacency[idx],
            None => &[],
        };
        succ.iter().map(move |&s| &self.labels[s])
    }

    /// Out-degree of `vertex`, zero for unknown vertices.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.index
            .get(vertex)
            .map_or(0, |&idx| self.adjacency[idx].len())
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }
}

impl<V: Eq + Hash + Clone> Default for AdjacencyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, Vec<V>)> for AdjacencyMap<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<V>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (vertex, successors) in iter {
            graph.add_vertex(vertex.clone());
            for to in successors {
                graph.add_edge(vertex.clone(), to);
            }
        }
        graph
    }
}

impl<V: PartialEq> PartialEq for AdjacencyMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels && self.adjacency == other.adjacency
    }
}

impl<V: Eq> Eq for AdjacencyMap<V> {}

/// Serialized as a sequence of `(vertex, successors)` pairs in insertion order.
impl<V: Serialize> Serialize for AdjacencyMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, V> Deserialize<'de> for AdjacencyMap<V>
where
    V: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<(V, Vec<V>)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
