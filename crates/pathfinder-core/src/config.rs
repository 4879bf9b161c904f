//! Store configuration for pathfinder
//!
//! Configuration is stored in `.pathfinder/config.toml`.

pub mod types;

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{PathfinderError, Result};

pub use types::{GraphConfig, SeedConfig, StoreConfig, TraversalConfig, STORE_FORMAT_VERSION};

impl StoreConfig {
    /// Deadline applied to each traversal, if any
    pub fn traversal_timeout(&self) -> Option<Duration> {
        match self.traversal.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(PathfinderError::InvalidStore {
                reason: format!(
                    "config version {} is newer than supported version {}",
                    config.version, STORE_FORMAT_VERSION
                ),
            });
        }

        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathfinderError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
