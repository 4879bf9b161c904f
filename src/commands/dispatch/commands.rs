//! Command implementations for all pathfinder commands

use crate::cli::{Commands, EdgeCommands, NodeCommands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{cancel, edge, init, node, seed, stats, traverse};
use pathfinder_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init { reject_self_loops } => {
                init::execute(ctx.cli, ctx.root, *reject_self_loops)
            }
            Commands::Node { command } => execute_node(ctx, command),
            Commands::Edge { command } => execute_edge(ctx, command),
            Commands::Bfs { start } => {
                let store = ctx.discover_or_open_store()?;
                let token = cancel::traversal_token(ctx.cli, &store);
                traverse::execute_bfs(ctx.cli, &store, *start, &token)
            }
            Commands::Path { src, dst } => {
                let store = ctx.discover_or_open_store()?;
                let token = cancel::traversal_token(ctx.cli, &store);
                traverse::execute_path(ctx.cli, &store, *src, *dst, &token)
            }
            Commands::Seed { nodes, edges } => {
                let store = ctx.discover_or_open_store()?;
                seed::execute(ctx.cli, ctx.root, &store, nodes.as_deref(), edges.as_deref())
            }
            Commands::Stats => {
                let store = ctx.discover_or_open_store()?;
                stats::execute(ctx.cli, &store)
            }
        }
    }
}

fn execute_node(ctx: &CommandContext, command: &NodeCommands) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    match command {
        NodeCommands::List => node::execute_list(ctx.cli, &store),
        NodeCommands::Show { id } => node::execute_show(ctx.cli, &store, *id),
        NodeCommands::Create { name } => node::execute_create(ctx.cli, &store, name),
        NodeCommands::Delete { id } => node::execute_delete(ctx.cli, &store, *id),
    }
}

fn execute_edge(ctx: &CommandContext, command: &EdgeCommands) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    match command {
        EdgeCommands::List { from } => edge::execute_list(ctx.cli, &store, *from),
        EdgeCommands::Show { id } => edge::execute_show(ctx.cli, &store, *id),
        EdgeCommands::Create { src, dst, weight } => {
            edge::execute_create(ctx.cli, &store, *src, *dst, weight)
        }
        EdgeCommands::Delete { id } => edge::execute_delete(ctx.cli, &store, *id),
    }
}
