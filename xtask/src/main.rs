use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "classic-graphs workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the comparative benchmarks against petgraph
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCHES: &[&str] = &["graph_benchmark", "disjoint_set_benchmark"];

/// The implementation every other column is compared against.
const BASELINE: &str = "petgraph";

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    group_id: String,
    function_id: Option<String>,
    value_str: Option<String>,
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
    BytesDecimal(u64),
}

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// The crate root, one level above this manifest.
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// workload -> implementation -> ops/s
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    for bench in BENCHES {
        println!("\n>>> Running {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.current_dir(project_root());
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {bench}"))?;

        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: Benchmark {bench} failed");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let root = project_root();
    let criterion_dir = root.join("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(&criterion_dir, &mut results)?;

    let implementations: BTreeSet<&str> = results
        .values()
        .flat_map(|m| m.keys().map(String::as_str))
        .collect();

    let mut out = String::from("# Comparative Benchmark Report\n\n| Workload |");
    for imp in &implementations {
        out.push_str(&format!(" {imp} (Ops/s) | vs {BASELINE} |"));
    }
    out.push_str("\n|---|");
    for _ in &implementations {
        out.push_str("---|---|");
    }
    out.push('\n');

    for (workload, by_impl) in &results {
        out.push_str(&format!("| {workload} |"));
        let baseline = by_impl.get(BASELINE).copied().unwrap_or(0.0);

        for imp in &implementations {
            match by_impl.get(*imp) {
                Some(&ops) => {
                    let rel = if baseline > 0.0 { ops / baseline } else { 0.0 };
                    out.push_str(&format!(" {} | **{rel:.2}x** |", format_ops(ops)));
                }
                None => out.push_str(" N/A | - |"),
            }
        }
        out.push('\n');
    }

    let report_dir = root.join("benchmark_results");
    fs::create_dir_all(&report_dir)?;
    let report_path = report_dir.join("report.md");
    fs::write(&report_path, out)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion output looking for `new/benchmark.json` + `new/estimates.json` pairs.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) == Some("report") {
            continue;
        }

        if path.file_name().and_then(|s| s.to_str()) == Some("new") {
            let info_path = path.join("benchmark.json");
            let estimates_path = path.join("estimates.json");
            if !info_path.exists() || !estimates_path.exists() {
                continue;
            }

            let info: BenchmarkInfo = serde_json::from_str(&fs::read_to_string(&info_path)?)
                .with_context(|| format!("Malformed {}", info_path.display()))?;
            let raw_estimates = fs::read_to_string(&estimates_path)?;
            let estimates: Estimates = serde_json::from_str(&raw_estimates)
                .with_context(|| format!("Malformed {}", estimates_path.display()))?;

            let time_ns = estimates.mean.point_estimate;
            if time_ns <= 0.0 {
                continue;
            }

            let elements = match info.throughput {
                Some(
                    Throughput::Elements(n) | Throughput::Bytes(n) | Throughput::BytesDecimal(n),
                ) => n as f64,
                None => 1.0,
            };

            let workload = match &info.value_str {
                Some(value) => format!("{}/{value}", info.group_id),
                None => info.group_id.clone(),
            };
            let implementation = info.function_id.unwrap_or_else(|| info.group_id.clone());

            results
                .entry(workload)
                .or_default()
                .insert(implementation, (elements * 1e9) / time_ns);
        } else {
            collect_results(&path, results)?;
        }
    }

    Ok(())
}
