//! Illustrative inputs from Cormen, Leiserson, Rivest and Stein,
//! *Introduction to Algorithms*.

use crate::graph::{AdjacencyMap, WeightedEdge};

/// Garments from the "getting dressed" example (section 22.4).
pub const GARMENTS: [&str; 9] = [
    "undershorts",
    "pants",
    "belt",
    "shirt",
    "tie",
    "jacket",
    "socks",
    "shoes",
    "watch",
];

/// Precedence constraints between [`GARMENTS`]: `(a, b)` means `a` goes on before `b`.
pub const DRESSING_ORDER: [(&str, &str); 8] = [
    ("undershorts", "pants"),
    ("undershorts", "shoes"),
    ("pants", "belt"),
    ("belt", "jacket"),
    ("shirt", "belt"),
    ("shirt", "tie"),
    ("tie", "jacket"),
    ("socks", "shoes"),
];

/// The "getting dressed" precedence graph as `(vertices, edges)`.
pub fn getting_dressed() -> (Vec<&'static str>, Vec<(&'static str, &'static str)>) {
    (GARMENTS.to_vec(), DRESSING_ORDER.to_vec())
}

/// The directed graph of figure 22.6.
pub fn figure_22_6() -> AdjacencyMap<char> {
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

/// The weighted undirected graph of figure 23.4 as `(vertex_count, edges)`.
///
/// Vertices `a..=i` are numbered `0..=8`. Its minimum spanning tree weighs 37.
pub fn figure_23_4() -> (usize, Vec<WeightedEdge<u32>>) {
    let edges: [(usize, usize, u32); 14] = [
        (0, 1, 4),
        (0, 7, 8),
        (1, 2, 8),
        (1, 7, 11),
        (2, 3, 7),
        (2, 8, 2),
        (2, 5, 4),
        (3, 4, 9),
        (3, 5, 14),
        (4, 5, 10),
        (5, 6, 2),
        (6, 7, 1),
        (6, 8, 6),
        (7, 8, 7),
    ];
    (9, edges.into_iter().map(WeightedEdge::from).collect())
}
