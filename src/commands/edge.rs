//! `pathfinder edge` commands

use crate::cli::parse::parse_weight;
use crate::cli::Cli;
use crate::commands::format::{format_weight, output_by_format, print_json, print_json_status};
use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::graph::{Edge, EdgeId, NodeId};
use pathfinder_core::store::GraphStore;

fn print_edge_line(edge: &Edge) {
    println!(
        "{}\t{} -> {}\t{}",
        edge.id,
        edge.src_id,
        edge.dst_id,
        format_weight(edge.weight)
    );
}

pub fn execute_list(cli: &Cli, store: &GraphStore, from: Option<NodeId>) -> Result<()> {
    let edges = match from {
        Some(id) if store.get_node(id).is_none() => {
            return Err(PathfinderError::NodeNotFound { id })
        }
        Some(id) => store.outbound_edges(id),
        None => store.list_edges(),
    };

    output_by_format!(cli.format,
        json => {
            print_json(&edges)?;
        },
        human => {
            if edges.is_empty() && !cli.quiet {
                println!("No edges");
            }
            for edge in &edges {
                print_edge_line(edge);
            }
        }
    );
    Ok(())
}

pub fn execute_show(cli: &Cli, store: &GraphStore, id: EdgeId) -> Result<()> {
    let edge = store
        .get_edge(id)
        .ok_or(PathfinderError::EdgeNotFound { id })?;

    output_by_format!(cli.format,
        json => {
            print_json(&edge)?;
        },
        human => {
            print_edge_line(&edge);
        }
    );
    Ok(())
}

pub fn execute_create(
    cli: &Cli,
    store: &GraphStore,
    src: NodeId,
    dst: NodeId,
    weight: &str,
) -> Result<()> {
    let weight = parse_weight(weight)?;
    let edge = store.create_edge(src, dst, weight)?;

    output_by_format!(cli.format,
        json => {
            print_json(&edge)?;
        },
        human => {
            if cli.quiet {
                println!("{}", edge.id);
            } else {
                println!(
                    "Created edge {} ({} -> {}, weight {})",
                    edge.id,
                    edge.src_id,
                    edge.dst_id,
                    format_weight(edge.weight)
                );
            }
        }
    );
    Ok(())
}

pub fn execute_delete(cli: &Cli, store: &GraphStore, id: EdgeId) -> Result<()> {
    store.delete_edge(id)?;

    output_by_format!(cli.format,
        json => {
            print_json_status("deleted", &[("edge_id", serde_json::json!(id))])?;
        },
        human => {
            if !cli.quiet {
                println!("Deleted edge {}", id);
            }
        }
    );
    Ok(())
}
