//! mcpgen Core Library
//!
//! Translates a single master MCP server configuration into the
//! client-specific documents consumed by Claude Code, OpenCode and Warp,
//! and merges the generated server map into existing client state files.

pub mod client;
pub mod commands;
pub mod config;
pub mod context;
pub mod master;

/// Re-exports of commonly used types
pub mod prelude {
    // Master configuration
    pub use crate::master::{
        MasterConfig, MasterConfigError, ServerDefinition, ServerKind, load_master,
    };

    // Client renderers
    pub use crate::client::{
        ConfigRenderer, DerivedDocuments, Rendered, claude_code::ClaudeCodeRenderer,
        opencode::OpenCodeRenderer, warp::WarpRenderer,
    };

    // Persistence
    pub use crate::config::managed_json::{merge_mcp_servers, replace_field, write_json_document};
    pub use crate::config::paths::{MergeTarget, OverwriteTarget, TargetPaths};

    // Commands
    pub use crate::commands::{
        ListCommand, ServerListing, SyncCommand, SyncReport, TargetOutcome, WriteMode,
    };

    pub use crate::context::AppContext;
}
