//! `pathfinder node` commands

use crate::cli::Cli;
use crate::commands::format::{output_by_format, print_json, print_json_status};
use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::graph::{Node, NodeId};
use pathfinder_core::store::GraphStore;

fn print_node_line(node: &Node) {
    println!("{}\t{}", node.id, node.name);
}

pub fn execute_list(cli: &Cli, store: &GraphStore) -> Result<()> {
    let nodes = store.list_nodes();

    output_by_format!(cli.format,
        json => {
            print_json(&nodes)?;
        },
        human => {
            if nodes.is_empty() && !cli.quiet {
                println!("No nodes");
            }
            for node in &nodes {
                print_node_line(node);
            }
        }
    );
    Ok(())
}

pub fn execute_show(cli: &Cli, store: &GraphStore, id: NodeId) -> Result<()> {
    let node = store
        .get_node(id)
        .ok_or(PathfinderError::NodeNotFound { id })?;
    let outbound = store.outbound_edges(id);

    output_by_format!(cli.format,
        json => {
            print_json(&serde_json::json!({
                "id": node.id,
                "name": node.name,
                "created": node.created,
                "outbound_edges": outbound.len(),
            }))?;
        },
        human => {
            print_node_line(&node);
            if !cli.quiet {
                println!("created: {}", node.created.to_rfc3339());
                println!("outbound edges: {}", outbound.len());
            }
        }
    );
    Ok(())
}

pub fn execute_create(cli: &Cli, store: &GraphStore, name: &str) -> Result<()> {
    let node = store.create_node(name)?;

    output_by_format!(cli.format,
        json => {
            print_json(&node)?;
        },
        human => {
            if cli.quiet {
                println!("{}", node.id);
            } else {
                println!("Created node {} ({})", node.id, node.name);
            }
        }
    );
    Ok(())
}

pub fn execute_delete(cli: &Cli, store: &GraphStore, id: NodeId) -> Result<()> {
    let removed_edges = store.delete_node(id)?;

    output_by_format!(cli.format,
        json => {
            print_json_status(
                "deleted",
                &[
                    ("node_id", serde_json::json!(id)),
                    ("edges_removed", serde_json::json!(removed_edges)),
                ],
            )?;
        },
        human => {
            if !cli.quiet {
                println!("Deleted node {} ({} edges removed)", id, removed_edges);
            }
        }
    );
    Ok(())
}
