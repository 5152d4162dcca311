//! Master configuration loading.
//!
//! The master file is read once per run. A missing or malformed file is the
//! only fatal condition of a sync.

pub mod schema;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use schema::{MasterConfig, ServerDefinition, ServerKind, UNKNOWN_SERVER_NAME};

/// Errors raised while loading the master configuration.
#[derive(Debug, Error)]
pub enum MasterConfigError {
    /// The master file does not exist.
    #[error("master configuration not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The master file exists but could not be read.
    #[error("failed to read master configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The master file is not valid JSON or does not match the schema.
    #[error("invalid JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the master configuration at `path`.
pub fn load_master(path: &Path) -> Result<MasterConfig, MasterConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MasterConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => MasterConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config =
        MasterConfig::from_json_str(&content).map_err(|source| MasterConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        servers = config.mcp_servers.len(),
        "Loaded master configuration"
    );
    Ok(config)
}
