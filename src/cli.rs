//! CLI commands: argument parsing, input checks, and console formatting.

use crate::error::{Error, Result};
use crate::graph::{self, Graph, ShortestPaths, TopoOrder};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// gq — weighted digraph query tool
#[derive(Parser)]
#[command(name = "gq")]
#[command(about = "Query a weighted digraph: shortest paths, topological order, adjacency checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest paths from a source vertex to every vertex (Dijkstra)
    Paths {
        /// Graph description file
        graph_file: PathBuf,
        /// Source vertex id
        source: i64,
        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Topological order of the graph, or cycle detection (Kahn)
    Order {
        /// Graph description file
        graph_file: PathBuf,
        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check direct adjacency for each query pair in a file
    Check {
        /// Graph description file
        graph_file: PathBuf,
        /// Query file with one "from to" pair per line
        query_file: PathBuf,
    },
}

/// Parse arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Paths {
            graph_file,
            source,
            json,
        } => cmd_paths(&graph_file, source, json),
        Commands::Order { graph_file, json } => cmd_order(&graph_file, json),
        Commands::Check {
            graph_file,
            query_file,
        } => cmd_check(&graph_file, &query_file),
    }
}

/// Check that every input path exists before any work starts.
fn ensure_exists(paths: &[&Path]) -> Result<()> {
    for path in paths {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}

fn cmd_paths(graph_file: &Path, source: i64, json: bool) -> Result<()> {
    ensure_exists(&[graph_file])?;
    let graph = graph::load_graph(graph_file)?;
    let paths = graph::shortest_paths(&graph, source)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        print_paths(&paths);
    }
    Ok(())
}

/// One line per vertex in key order: the path from the source and its cost.
fn print_paths(paths: &ShortestPaths<i64>) {
    for (id, info) in paths.iter() {
        match paths.path(id) {
            Some(path) => {
                let steps: Vec<String> = path.iter().map(i64::to_string).collect();
                println!("{id}: {} (cost {})", steps.join(", "), info.distance);
            }
            None => println!("{id}: unreachable"),
        }
    }
}

fn cmd_order(graph_file: &Path, json: bool) -> Result<()> {
    ensure_exists(&[graph_file])?;
    let graph = graph::load_graph(graph_file)?;

    match graph::topological_sort(&graph) {
        Ok(order) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&order)?);
            } else {
                print_order(&order);
            }
            Ok(())
        }
        // An expected outcome, not an execution failure: report and exit
        // cleanly.
        Err(Error::CycleDetected { ordered, total }) => {
            if json {
                let report = serde_json::json!({
                    "cycle_detected": true,
                    "ordered": ordered,
                    "total": total,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Graph contains a cycle; no topological order exists.");
            }
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn print_order(order: &TopoOrder<i64>) {
    let ids: Vec<String> = order.order().iter().map(i64::to_string).collect();
    println!("Topological order: {{{}}}", ids.join(", "));
}

fn cmd_check(graph_file: &Path, query_file: &Path) -> Result<()> {
    ensure_exists(&[graph_file, query_file])?;
    let graph = graph::load_graph(graph_file)?;
    let queries = graph::load_queries(query_file)?;

    for (from, to) in queries {
        println!("{}", format_check(&graph, from, to));
    }
    Ok(())
}

/// Answer one adjacency query. A missing edge or endpoint is an answer,
/// not an error.
fn format_check(graph: &Graph<i64>, from: i64, to: i64) -> String {
    if !graph.contains(&from) {
        return format!("{from} {to}: vertex {from} not found");
    }
    match graph.edge_weight(&from, &to) {
        Some(weight) => format!("{from} {to}: connected, edge weight {weight}"),
        None => format!("{from} {to}: not connected"),
    }
}
