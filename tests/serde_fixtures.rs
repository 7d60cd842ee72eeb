use classic_graphs::{
    minimum_spanning_forest, reachable_from, samples, AdjacencyMap, SpanningForest, WeightedEdge,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct WeightedGraph {
    vertex_count: usize,
    edges: Vec<WeightedEdge<u32>>,
}

#[test]
fn json_edge_list_matches_bundled_sample() {
    let graph: WeightedGraph =
        serde_json::from_str(include_str!("data/figure_23_4.json")).unwrap();
    let (n, edges) = samples::figure_23_4();

    assert_eq!(graph.vertex_count, n);
    assert_eq!(graph.edges, edges);

    let mst = minimum_spanning_forest(graph.vertex_count, &graph.edges).unwrap();
    assert_eq!(mst.total_weight(), 37);
}

#[test]
fn spanning_forest_survives_json() {
    let (n, edges) = samples::figure_23_4();
    let mst = minimum_spanning_forest(n, &edges).unwrap();

    let json = serde_json::to_value(&mst).unwrap();
    assert_eq!(json["vertex_count"], 9);
    assert_eq!(json["edges"][0], serde_json::json!({ "u": 6, "v": 7, "weight": 1 }));

    let back: SpanningForest<u32> = serde_json::from_value(json).unwrap();
    assert_eq!(back, mst);
}

#[test]
fn spanning_forest_json_is_validated() {
    // Two self-loops on one vertex: more edges than vertices.
    let err = serde_json::from_str::<SpanningForest<u32>>(
        r#"{"vertex_count":1,"edges":[{"u":0,"v":0,"weight":1},{"u":0,"v":0,"weight":2}]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("edge (0, 0) closes a cycle"));

    let triangle = serde_json::json!({
        "vertex_count": 3,
        "edges": [
            { "u": 0, "v": 1, "weight": 1 },
            { "u": 1, "v": 2, "weight": 1 },
            { "u": 2, "v": 0, "weight": 1 }
        ]
    });
    let err = serde_json::from_value::<SpanningForest<u32>>(triangle).unwrap_err();
    assert!(err.to_string().contains("closes a cycle"));

    let err = serde_json::from_str::<SpanningForest<u32>>(
        r#"{"vertex_count":0,"edges":[{"u":0,"v":1,"weight":1}]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("out of range"));

    let forest: SpanningForest<u32> = serde_json::from_str(
        r#"{"vertex_count":4,"edges":[{"u":0,"v":1,"weight":3},{"u":2,"v":3,"weight":1}]}"#,
    )
    .unwrap();
    assert_eq!(forest.component_count(), 2);
    assert!(!forest.is_spanning_tree());
}

#[test]
fn adjacency_map_reads_pairs_in_order() {
    let graph: AdjacencyMap<char> = serde_json::from_str(
        r#"[["u", ["v", "x"]], ["v", ["y"]], ["w", ["y", "z"]], ["x", ["v"]], ["y", ["x"]], ["z", ["z"]]]"#,
    )
    .unwrap();

    assert_eq!(graph, samples::figure_22_6());
    assert_eq!(reachable_from(&graph, &'w').len(), 5);
    assert_eq!(
        serde_json::to_string(&graph).unwrap(),
        r#"[["u",["v","x"]],["v",["y"]],["w",["y","z"]],["x",["v"]],["y",["x"]],["z",["z"]]]"#
    );
}
