//! Claude Code client implementation.

use serde_json::{Map, Value, json};

use crate::client::{ConfigRenderer, Rendered};
use crate::master::{MasterConfig, ServerKind};

pub const CLAUDE_CODE_SCHEMA: &str = "https://json.schemastore.org/claude-code-settings.json";

/// Key holding the server map in every Claude Code document.
pub const MCP_SERVERS_KEY: &str = "mcpServers";

#[derive(Debug, Default, Clone, Copy)]
pub struct ClaudeCodeRenderer;

impl ClaudeCodeRenderer {
    /// Server map only, as merged into existing `.claude.json` files.
    pub fn render_servers(&self, master: &MasterConfig) -> (Map<String, Value>, Vec<String>) {
        let mut map = Map::new();
        let mut warnings = Vec::new();
        for server in &master.mcp_servers {
            match server.kind() {
                ServerKind::Process {
                    name,
                    program,
                    args,
                    env,
                } => {
                    map.insert(name.to_string(), render_server(program, args, env));
                }
                ServerKind::Http { name, .. } => {
                    tracing::debug!(server = name, "Skipping HTTP server for Claude Code");
                }
                ServerKind::Malformed { name } => {
                    tracing::warn!(server = name, "Skipping server without a command");
                    warnings.push(format!("Skipping server '{name}' because it has no command."));
                }
            }
        }
        (map, warnings)
    }

    /// Wrap a rendered server map into the full settings document.
    pub fn settings_document(servers: &Map<String, Value>) -> Value {
        json!({
            "$schema": CLAUDE_CODE_SCHEMA,
            MCP_SERVERS_KEY: servers,
        })
    }
}

impl ConfigRenderer for ClaudeCodeRenderer {
    fn id(&self) -> &'static str {
        "claude-code"
    }

    fn render(&self, master: &MasterConfig) -> Rendered {
        let (servers, warnings) = self.render_servers(master);
        Rendered {
            document: Self::settings_document(&servers),
            warnings,
        }
    }
}

fn render_server(program: &str, args: &[String], env: Option<&Map<String, Value>>) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), json!("stdio"));
    obj.insert("command".to_string(), json!(program));
    if !args.is_empty() {
        obj.insert("args".to_string(), json!(args));
    }
    if let Some(env) = env {
        obj.insert("env".to_string(), Value::Object(env.clone()));
    }
    Value::Object(obj)
}
