//! JSON document persistence with single-key merges.

use std::path::Path;

use anyhow::Context;
use serde_json::{Map, Value};

use crate::client::claude_code::MCP_SERVERS_KEY;

/// Serialize `document` to `path`, replacing whatever was there.
pub fn write_json_document(path: &Path, document: &Value) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    let bytes = serde_json::to_vec_pretty(document).context("Failed to serialize JSON config")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Wrote config file");
    Ok(())
}

/// Replace the top-level `field` of the document at `path` with `value`.
///
/// Every other top-level key keeps its value and position. A missing or
/// unusable existing file is treated as an empty document.
pub fn replace_field(path: &Path, field: &str, value: Value) -> anyhow::Result<Map<String, Value>> {
    let mut root = load_json_map_lenient(path);
    root.insert(field.to_string(), value);
    write_json_document(path, &Value::Object(root.clone()))?;
    Ok(root)
}

/// Replace the `mcpServers` map of an existing client state file.
pub fn merge_mcp_servers(
    path: &Path,
    servers: &Map<String, Value>,
) -> anyhow::Result<Map<String, Value>> {
    replace_field(path, MCP_SERVERS_KEY, Value::Object(servers.clone()))
}

fn load_json_map_lenient(path: &Path) -> Map<String, Value> {
    match load_json_map(path) {
        Ok(Some(map)) => map,
        Ok(None) => Map::new(),
        Err(err) => {
            let error = format!("{err:#}");
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "Ignoring unreadable config file"
            );
            Map::new()
        }
    }
}

fn load_json_map(path: &Path) -> anyhow::Result<Option<Map<String, Value>>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let value: Value =
        serde_json::from_slice(&bytes).with_context(|| "Failed to parse JSON config")?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => anyhow::bail!("Expected JSON object at root: {}", path.display()),
    }
}
