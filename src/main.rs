use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use shortest_paths::{
    config::AppConfig,
    network::{
        generator::{GenerationError, generate_graph},
        graph::Graph,
    },
    pathfinding::{all_pairs_shortest_paths, single_source_shortest_paths},
    report::{self, JsonReport},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

// Adjacency lists of bigger graphs are not worth printing
const PRINT_NODE_LIMIT: usize = 50;
const PRINT_EDGE_LIMIT: usize = 2500;

fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let stdout = io::stdout();
    match run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Writes the whole report to `out`. With `print_json` set, `out` receives exactly one JSON document.
fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<(), Box<dyn Error>> {
    info!(graph = ?config.graph, start_node = config.start_node, "starting");

    if !config.print_json {
        writeln!(out, "\n\n ******** GENERATING GRAPH ********")?;
    }
    let graph = match generate_graph(&config.graph) {
        Ok(graph) => graph,
        Err(e @ GenerationError::Infeasible { .. }) => {
            // Reported, not a failure of the program
            warn!("{}", e);
            if config.print_json {
                writeln!(out, "{}", serde_json::json!({ "error": e.to_string() }))?;
            } else {
                writeln!(out, "{}", e)?;
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if config.print_json {
        return print_json(config, &graph, out);
    }

    if graph.node_count() < PRINT_NODE_LIMIT && graph.edge_count() < PRINT_EDGE_LIMIT {
        writeln!(out, "{}", report::format_graph(&graph))?;
    }
    if config.print_dot {
        writeln!(out, "{}", graph.to_dot())?;
    }

    writeln!(out, "\n\n ******** PERFORMING DIJKSTRA ********")?;
    match single_source_shortest_paths(&graph, config.start_node) {
        Ok(distances) => writeln!(
            out,
            "Single-Pair Distance Table (from node {}): {}",
            config.start_node,
            report::format_distances(&distances)
        )?,
        Err(e) => {
            warn!("single-source run skipped: {}", e);
            writeln!(out, "Single-Pair Distance Table unavailable: {}", e)?;
        }
    }

    writeln!(out, "\n\n ******** PERFORMING FLOYD WARSHALL ********")?;
    let matrix = all_pairs_shortest_paths(&graph);
    if matrix.has_negative_cycle() {
        warn!("graph contains a negative cycle, all-pairs distances through it are not meaningful");
    }
    writeln!(out, "All-Pairs Distance Table:")?;
    writeln!(out, "{}", report::format_matrix(&matrix))?;

    Ok(())
}

fn print_json<W: Write>(config: &AppConfig, graph: &Graph, out: &mut W) -> Result<(), Box<dyn Error>> {
    let single_source = match single_source_shortest_paths(graph, config.start_node) {
        Ok(distances) => Some(distances),
        Err(e) => {
            warn!("single-source run skipped: {}", e);
            None
        }
    };
    let matrix = all_pairs_shortest_paths(graph);

    let report = JsonReport {
        graph,
        start_node: config.start_node,
        single_source: single_source.as_deref(),
        all_pairs: &matrix,
    };
    writeln!(out, "{}", report.to_json()?)?;
    Ok(())
}
