//! Runs the three algorithms on the textbook sample inputs.
//!
//! `RUST_LOG=debug cargo run --example textbook --features tracing` also shows
//! the algorithm events.

use anyhow::Context;
use classic_graphs::{minimum_spanning_forest, reachable_from, samples, topological_sort};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("\n--- Topological Sort (getting dressed) ---");
    let (garments, constraints) = samples::getting_dressed();
    let order = topological_sort(garments, constraints).context("dressing order")?;
    println!("Topological Order: {order:?}");

    println!("\n--- Depth-First Search (figure 22.6) ---");
    let graph = samples::figure_22_6();
    let mut visited: Vec<char> = reachable_from(&graph, &'u').into_iter().collect();
    visited.sort_unstable();
    println!("Visited from 'u': {visited:?}");

    println!("\n--- Kruskal's Algorithm (figure 23.4) ---");
    let (n, edges) = samples::figure_23_4();
    let mst = minimum_spanning_forest(n, &edges)?;
    println!("Edges in MST:");
    for edge in &mst {
        println!("{} - {} : {}", edge.u, edge.v, edge.weight);
    }
    println!("Total Weight: {}", mst.total_weight());
    println!("As JSON: {}", serde_json::to_string(&mst)?);

    Ok(())
}
