//! Disjoint Set (Union-Find) over dense `usize` indices.
//!
//! Elements are indices into a parent array, so the structure is an arena with
//! no pointer graph. `find` uses path halving: every node visited on the way to
//! the root is re-pointed at its grandparent.
//!
//! # Performance
//!
//! - With [`Linking::ByRank`], `find`/`union` run in amortized inverse-Ackermann time.
//! - With [`Linking::Attach`] (the default) there is no balancing; path halving
//!   still keeps trees shallow for the small graphs this is used on.

/// How [`DisjointSet::union`] links two distinct roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Linking {
    /// Attach the second root directly under the first.
    #[default]
    Attach,
    /// Attach the shallower tree under the deeper one.
    ByRank,
}

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers; a root is its own parent.
    parent: Vec<usize>,
    /// Rank (depth upper bound), only maintained under `Linking::ByRank`.
    rank: Vec<u8>,
    linking: Linking,
    sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets `{0}, {1}, .., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self::with_linking(n, Linking::default())
    }

    /// Creates `n` singleton sets using the given linking policy.
    pub fn with_linking(n: usize, linking: Linking) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            linking,
            sets: n,
        }
    }

    /// Creates a new set containing a single element.
    /// Returns the representative ID of the new set.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        self.sets += 1;
        id
    }

    /// Finds the representative of the set containing `id`, halving the path.
    ///
    /// # Panics
    /// Panics if `id >= self.len()`.
    pub fn find(&mut self, mut id: usize) -> usize {
        assert!(id < self.parent.len(), "disjoint set index {id} out of bounds");
        while self.parent[id] != id {
            let grandparent = self.parent[self.parent[id]];
            self.parent[id] = grandparent;
            id = grandparent;
        }
        id
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        let root1 = self.find(id1);
        let root2 = self.find(id2);

        if root1 == root2 {
            return false;
        }

        match self.linking {
            Linking::Attach => self.parent[root2] = root1,
            Linking::ByRank => {
                let (rank1, rank2) = (self.rank[root1], self.rank[root2]);
                if rank1 < rank2 {
                    self.parent[root1] = root2;
                } else {
                    self.parent[root2] = root1;
                    if rank1 == rank2 {
                        self.rank[root1] = rank1.saturating_add(1);
                    }
                }
            }
        }

        self.sets -= 1;
        true
    }

    /// Returns `true` if `id1` and `id2` are in the same set.
    pub fn same_set(&mut self, id1: usize, id2: usize) -> bool {
        self.find(id1) == self.find(id2)
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// The linking policy in use.
    pub fn linking(&self) -> Linking {
        self.linking
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set() {
        let mut ds = DisjointSet::default();

        let a = ds.make_set();
        let b = ds.make_set();
        let c = ds.make_set();

        assert_eq!(ds.find(a), a);
        assert_eq!(ds.find(b), b);
        assert_eq!(ds.set_count(), 3);

        assert!(ds.union(a, b));
        assert_eq!(ds.find(a), ds.find(b));
        assert_ne!(ds.find(a), ds.find(c));
        assert!(ds.same_set(b, a));
        assert!(!ds.same_set(b, c));

        assert!(ds.union(b, c));
        assert_eq!(ds.find(a), ds.find(c));

        // Already united
        assert!(!ds.union(a, c));
        assert_eq!(ds.set_count(), 1);
    }

    #[test]
    fn attach_links_second_root_under_first() {
        let mut ds = DisjointSet::new(4);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(ds.union(3, 1));

        // 3's root (2) took 1's root (0) as a child.
        assert_eq!(ds.find(0), 2);
        assert_eq!(ds.find(1), 2);
    }

    #[test]
    fn path_halving_flattens_chain() {
        let mut ds = DisjointSet::new(5);
        // Build chain 4 -> 3 -> 2 -> 1 -> 0 with Attach linking.
        for i in (1..5).rev() {
            assert!(ds.union(i - 1, i));
        }
        assert_eq!(ds.find(4), 0);
        // After one find every other node on the path points at its grandparent.
        assert_eq!(ds.parent[4], 2);
        assert_eq!(ds.parent[2], 0);
    }

    #[test]
    fn by_rank_keeps_deeper_root() {
        let mut ds = DisjointSet::with_linking(3, Linking::ByRank);
        assert!(ds.union(1, 2));
        let root = ds.find(1);
        assert!(ds.union(0, 1));
        assert_eq!(ds.find(0), root);
        assert_eq!(ds.linking(), Linking::ByRank);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn find_out_of_bounds_panics() {
        let mut ds = DisjointSet::new(2);
        ds.find(2);
    }
}
