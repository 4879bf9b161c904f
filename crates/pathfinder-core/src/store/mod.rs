//! Graph store for pathfinder
//!
//! The store owns the authoritative node and edge collections. It is
//! either volatile (`in_memory`) or backed by a `.pathfinder/` directory
//! holding `config.toml` and a SQLite database that every mutation is
//! written through to.

mod mutate;
pub mod paths;
mod query;
pub mod state;

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};

use crate::config::StoreConfig;
use crate::db::Database;
use crate::error::{PathfinderError, Result};
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR};
use state::GraphState;

/// The pathfinder graph store
///
/// Lock order is `state` then `db`. Readers only take `state` for reading.
#[derive(Debug)]
pub struct GraphStore {
    /// Store directory, if persisted
    root: Option<PathBuf>,
    /// Store configuration
    config: StoreConfig,
    /// Authoritative in-memory graph
    state: RwLock<GraphState>,
    /// SQLite database, if persisted
    db: Mutex<Option<Database>>,
}

impl GraphStore {
    /// Create a volatile store
    pub fn in_memory(config: StoreConfig) -> Self {
        GraphStore {
            root: None,
            config,
            state: RwLock::new(GraphState::default()),
            db: Mutex::new(None),
        }
    }

    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(PathfinderError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config = StoreConfig::load_or_default(&path.join(CONFIG_FILE))?;
        let db = Database::open(path)?;
        let loaded = db.load_graph()?;
        let state = GraphState::from_parts(
            loaded.nodes,
            loaded.edges,
            loaded.next_node_id,
            loaded.next_edge_id,
        )?;

        let stats = state.stats();
        tracing::debug!(nodes = stats.nodes, edges = stats.edges, "store opened");

        Ok(GraphStore {
            root: Some(path.to_path_buf()),
            config,
            state: RwLock::new(state),
            db: Mutex::new(Some(db)),
        })
    }

    /// Initialize a new store under the given project root
    pub fn init(project_root: &Path, config: StoreConfig) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR), config)
    }

    /// Initialize a store at an explicit store directory
    pub fn init_at(store_root: &Path, config: StoreConfig) -> Result<Self> {
        let config_path = store_root.join(CONFIG_FILE);
        if config_path.exists() {
            return Err(PathfinderError::StoreAlreadyExists {
                path: store_root.to_path_buf(),
            });
        }

        fs::create_dir_all(store_root)?;
        config.save(&config_path)?;
        tracing::info!(path = %store_root.display(), "initialized store");

        Self::open(store_root)
    }

    /// Store directory, or `None` for a volatile store
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn is_persistent(&self) -> bool {
        self.root.is_some()
    }

    /// Run `f` against the database, if there is one. Called with the
    /// state write lock held.
    fn persist<T: Default>(&self, f: impl FnOnce(&mut Database) -> Result<T>) -> Result<T> {
        let mut db = self.db.lock();
        match db.as_mut() {
            Some(db) => f(db),
            None => Ok(T::default()),
        }
    }
}

#[cfg(test)]
mod tests;
