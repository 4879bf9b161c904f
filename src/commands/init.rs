//! `pathfinder init` command - create a new store

use std::path::Path;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use crate::commands::format::{output_by_format, print_json_status};
use pathfinder_core::config::StoreConfig;
use pathfinder_core::error::Result;
use pathfinder_core::store::GraphStore;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, reject_self_loops: bool) -> Result<()> {
    let mut config = StoreConfig::default();
    config.graph.reject_self_loops = reject_self_loops;

    let store = match cli.store.as_ref() {
        Some(path) => GraphStore::init_at(&resolve_against(root, path), config)?,
        None => GraphStore::init(root, config)?,
    };
    let store_root = store
        .root()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    output_by_format!(cli.format,
        json => {
            print_json_status("ok", &[("store", serde_json::json!(store_root))])?;
        },
        human => {
            if !cli.quiet {
                println!("Initialized pathfinder store at {}", store_root);
            }
        }
    );
    Ok(())
}
