use std::path::{Path, PathBuf};

use crate::error::{PathfinderError, Result};

/// Store directory name (hidden)
pub const DEFAULT_STORE_DIR: &str = ".pathfinder";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Walk up from `root` looking for a store directory
pub fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        let store_path = current.join(DEFAULT_STORE_DIR);
        if store_path.is_dir() {
            return Ok(store_path);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(PathfinderError::StoreNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
