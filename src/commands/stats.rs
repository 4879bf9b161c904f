//! `pathfinder stats` command

use crate::cli::Cli;
use crate::commands::format::{output_by_format, print_json};
use pathfinder_core::error::Result;
use pathfinder_core::store::GraphStore;

pub fn execute(cli: &Cli, store: &GraphStore) -> Result<()> {
    let stats = store.stats();
    let consistent = store.verify()?;
    if !consistent {
        tracing::warn!("in-memory graph and database counts differ");
    }

    output_by_format!(cli.format,
        json => {
            print_json(&serde_json::json!({
                "nodes": stats.nodes,
                "edges": stats.edges,
                "store": store.root().map(|p| p.display().to_string()),
                "consistent": consistent,
            }))?;
        },
        human => {
            println!("nodes: {}", stats.nodes);
            println!("edges: {}", stats.edges);
            if !cli.quiet {
                if let Some(root) = store.root() {
                    println!("store: {}", root.display());
                }
            }
        }
    );
    Ok(())
}
