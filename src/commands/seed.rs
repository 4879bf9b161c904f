//! `pathfinder seed` command - import CSV seed data

use std::path::Path;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use crate::commands::format::{output_by_format, print_json};
use pathfinder_core::error::Result;
use pathfinder_core::seed::load_seed;
use pathfinder_core::store::GraphStore;

/// Execute the seed command. Paths default to the store's `[seed]` config
/// and are resolved against the root directory.
pub fn execute(
    cli: &Cli,
    root: &Path,
    store: &GraphStore,
    nodes: Option<&Path>,
    edges: Option<&Path>,
) -> Result<()> {
    let seed_config = &store.config().seed;
    let nodes_path = resolve_against(
        root,
        nodes.unwrap_or_else(|| Path::new(&seed_config.nodes_file)),
    );
    let edges_path = resolve_against(
        root,
        edges.unwrap_or_else(|| Path::new(&seed_config.edges_file)),
    );

    let report = load_seed(store, &nodes_path, &edges_path)?;

    output_by_format!(cli.format,
        json => {
            print_json(&report)?;
        },
        human => {
            if !cli.quiet {
                println!(
                    "Nodes: {} created, {} already present",
                    report.nodes_created, report.nodes_skipped
                );
                println!(
                    "Edges: {} created, {} already present",
                    report.edges_created, report.edges_skipped
                );
                if report.edges_unresolved > 0 {
                    println!(
                        "Skipped {} edges referencing unknown nodes",
                        report.edges_unresolved
                    );
                }
            }
        }
    );
    Ok(())
}
