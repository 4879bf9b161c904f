//! `pathfinder bfs` and `pathfinder path` commands

use crate::cli::Cli;
use crate::commands::format::{format_weight, output_by_format, print_json};
use pathfinder_core::error::Result;
use pathfinder_core::graph::{AlgorithmEngine, BfsResult, CancelToken, NodeId, ShortestPath};
use pathfinder_core::store::GraphStore;

fn join_ids(ids: &[NodeId], sep: &str) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn output_bfs_human(cli: &Cli, result: &BfsResult) {
    println!("order: {}", join_ids(&result.order, " "));
    if cli.quiet {
        return;
    }
    for entry in &result.tree {
        let indent = "  ".repeat(entry.depth as usize);
        match entry.parent_id {
            Some(parent) => println!("{}{} (from {})", indent, entry.node_id, parent),
            None => println!("{}{}", indent, entry.node_id),
        }
    }
}

fn output_path_human(cli: &Cli, result: &ShortestPath) {
    println!("{}", join_ids(&result.path, " -> "));
    if !cli.quiet {
        println!(
            "distance: {} ({} hops)",
            format_weight(result.distance),
            result.hops()
        );
    }
}

/// Execute `bfs <start>`
pub fn execute_bfs(
    cli: &Cli,
    store: &GraphStore,
    start: NodeId,
    cancel: &CancelToken,
) -> Result<()> {
    let result = AlgorithmEngine::new(store).bfs(start, cancel)?;

    output_by_format!(cli.format,
        json => {
            print_json(&result)?;
        },
        human => {
            output_bfs_human(cli, &result);
        }
    );
    Ok(())
}

/// Execute `path <src> <dst>`
pub fn execute_path(
    cli: &Cli,
    store: &GraphStore,
    src: NodeId,
    dst: NodeId,
    cancel: &CancelToken,
) -> Result<()> {
    let result = AlgorithmEngine::new(store).shortest_path(src, dst, cancel)?;

    output_by_format!(cli.format,
        json => {
            print_json(&result)?;
        },
        human => {
            output_path_human(cli, &result);
        }
    );
    Ok(())
}
