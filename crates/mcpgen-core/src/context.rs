//! Application context for unified dependency injection.

use std::path::{Path, PathBuf};

use crate::config::TargetPaths;
use crate::master::{MasterConfig, MasterConfigError, load_master};

/// Resolved locations for one run.
///
/// The CLI creates this once from the real home directory; tests point it
/// at a temporary directory.
#[derive(Debug, Clone)]
pub struct AppContext {
    paths: TargetPaths,
}

impl AppContext {
    /// Create a new context rooted at an explicit home directory.
    pub fn new(home_dir: PathBuf) -> Self {
        Self {
            paths: TargetPaths::new(home_dir),
        }
    }

    /// Create a context for the current user.
    pub fn with_defaults() -> anyhow::Result<Self> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(Self::new(home_dir))
    }

    pub fn home_dir(&self) -> &Path {
        self.paths.home_dir()
    }

    pub fn paths(&self) -> &TargetPaths {
        &self.paths
    }

    pub fn master_config_path(&self) -> PathBuf {
        self.paths.master_config_path()
    }

    /// Load the master configuration from its well-known location.
    pub fn load_master(&self) -> Result<MasterConfig, MasterConfigError> {
        load_master(&self.master_config_path())
    }
}
