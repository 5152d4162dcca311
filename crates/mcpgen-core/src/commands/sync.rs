//! Sync command implementation.
//!
//! Regenerates every client document from the master configuration, writes
//! the full documents, then merges the Claude Code server map into the
//! client state files. A failed target is recorded and the run continues.

use std::path::{Path, PathBuf};

use crate::client::DerivedDocuments;
use crate::config::{TargetPaths, merge_mcp_servers, write_json_document};
use crate::context::AppContext;
use crate::master::MasterConfig;

/// How a target file was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// The whole file was replaced
    Overwrite,
    /// Only the `mcpServers` key was replaced
    Merge,
}

/// Result of writing a single target file
#[derive(Debug, Clone)]
pub struct TargetOutcome {
    pub label: &'static str,
    pub path: PathBuf,
    pub mode: WriteMode,
    /// Failure description, `None` when the write succeeded
    pub error: Option<String>,
}

impl TargetOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Report from a sync run
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Number of server definitions in the master configuration
    pub server_count: usize,
    /// Per-target outcomes, in write order
    pub targets: Vec<TargetOutcome>,
    /// Servers skipped with a warning
    pub warnings: Vec<String>,
}

impl SyncReport {
    pub fn failed(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.targets.iter().filter(|target| !target.is_ok())
    }
}

/// Sync command orchestrator
#[derive(Debug, Clone)]
pub struct SyncCommand {
    paths: TargetPaths,
}

impl SyncCommand {
    pub fn new(paths: TargetPaths) -> Self {
        Self { paths }
    }

    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.paths().clone())
    }

    pub fn execute(&self, master: &MasterConfig) -> SyncReport {
        tracing::info!(
            servers = master.mcp_servers.len(),
            "Generating client configurations"
        );

        let documents = DerivedDocuments::generate(master);

        let mut targets = Vec::new();

        let overwrites = self
            .paths
            .claude_code_targets()
            .into_iter()
            .map(|target| (target, &documents.claude_code.document))
            .chain([
                (self.paths.opencode_target(), &documents.opencode.document),
                (self.paths.warp_target(), &documents.warp.document),
            ]);
        for (target, document) in overwrites {
            let result = write_json_document(&target.path, document);
            targets.push(outcome(target.label, target.path, WriteMode::Overwrite, result));
        }

        for target in self.paths.merge_targets() {
            let result = merge_mcp_servers(&target.path, &documents.mcp_servers).map(|_| ());
            targets.push(outcome(target.label, target.path, WriteMode::Merge, result));
        }

        SyncReport {
            server_count: master.mcp_servers.len(),
            targets,
            warnings: documents.warnings().map(str::to_string).collect(),
        }
    }
}

fn outcome(
    label: &'static str,
    path: PathBuf,
    mode: WriteMode,
    result: anyhow::Result<()>,
) -> TargetOutcome {
    let error = match result {
        Ok(()) => None,
        Err(err) => {
            log_failure(label, &path, &err);
            Some(format!("{err:#}"))
        }
    };
    TargetOutcome {
        label,
        path,
        mode,
        error,
    }
}

fn log_failure(label: &str, path: &Path, err: &anyhow::Error) {
    let error = format!("{err:#}");
    tracing::error!(
        target_label = label,
        path = %path.display(),
        error = %error,
        "Failed to write client configuration"
    );
}

