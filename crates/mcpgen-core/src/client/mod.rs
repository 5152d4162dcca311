//! Client document renderers
//!
//! Each supported client consumes MCP servers in its own JSON shape:
//! - Claude Code: `{ "$schema", "mcpServers": { name: { "type": "stdio", ... } } }`
//! - OpenCode: `{ "$schema", "tools", "permission", "mcp": { name: { "type": "local", ... } } }`
//! - Warp: `{ name: { "command", "args", "env" } }`

pub mod claude_code;
pub mod opencode;
pub mod warp;

use serde_json::{Map, Value};

use crate::master::MasterConfig;

use self::claude_code::ClaudeCodeRenderer;
use self::opencode::OpenCodeRenderer;
use self::warp::WarpRenderer;

/// A rendered client document plus any servers that had to be skipped loudly.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub document: Value,
    pub warnings: Vec<String>,
}

impl Rendered {
    pub fn new(document: Value) -> Self {
        Self {
            document,
            warnings: Vec::new(),
        }
    }
}

/// Trait for client-specific document renderers
pub trait ConfigRenderer {
    /// Client identifier used in logs
    fn id(&self) -> &'static str;

    /// Render the full client document from the master configuration
    fn render(&self, master: &MasterConfig) -> Rendered;
}

/// All documents derived from one master configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedDocuments {
    /// Claude Code server map, merged into client state files
    pub mcp_servers: Map<String, Value>,
    pub claude_code: Rendered,
    pub opencode: Rendered,
    pub warp: Rendered,
}

impl DerivedDocuments {
    pub fn generate(master: &MasterConfig) -> Self {
        let (mcp_servers, warnings) = ClaudeCodeRenderer.render_servers(master);
        let claude_code = Rendered {
            document: ClaudeCodeRenderer::settings_document(&mcp_servers),
            warnings,
        };
        log_rendered(&ClaudeCodeRenderer, &claude_code);

        Self {
            mcp_servers,
            claude_code,
            opencode: render_with(&OpenCodeRenderer, master),
            warp: render_with(&WarpRenderer, master),
        }
    }

    /// Warnings from every renderer, in rendering order.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        [&self.claude_code, &self.opencode, &self.warp]
            .into_iter()
            .flat_map(|rendered| rendered.warnings.iter().map(String::as_str))
    }
}

fn render_with(renderer: &dyn ConfigRenderer, master: &MasterConfig) -> Rendered {
    let rendered = renderer.render(master);
    log_rendered(renderer, &rendered);
    rendered
}

fn log_rendered(renderer: &dyn ConfigRenderer, rendered: &Rendered) {
    tracing::debug!(
        client = renderer.id(),
        warnings = rendered.warnings.len(),
        "Rendered client document"
    );
}
