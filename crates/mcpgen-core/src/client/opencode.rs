//! OpenCode client implementation.

use serde_json::{Map, Value, json};

use crate::client::{ConfigRenderer, Rendered};
use crate::master::{MasterConfig, ServerDefinition, ServerKind};

pub const OPENCODE_SCHEMA: &str = "https://opencode.ai/config.json";

#[derive(Debug, Default, Clone, Copy)]
pub struct OpenCodeRenderer;

impl ConfigRenderer for OpenCodeRenderer {
    fn id(&self) -> &'static str {
        "opencode"
    }

    fn render(&self, master: &MasterConfig) -> Rendered {
        Rendered::new(json!({
            "$schema": OPENCODE_SCHEMA,
            "tools": master.tools_or_default(),
            "permission": master.permission_or_default(),
            "mcp": build_mcp_entries(&master.mcp_servers),
        }))
    }
}

fn build_mcp_entries(servers: &[ServerDefinition]) -> Map<String, Value> {
    let mut map = Map::new();
    for server in servers {
        // HTTP and malformed servers are both dropped without a word here
        if let ServerKind::Process {
            name,
            program,
            args,
            env,
        } = server.kind()
        {
            map.insert(name.to_string(), render_server(program, args, env));
        }
    }
    map
}

fn render_server(program: &str, args: &[String], env: Option<&Map<String, Value>>) -> Value {
    // OpenCode expects command as an array including the executable
    let mut command = Vec::with_capacity(args.len() + 1);
    command.push(program);
    command.extend(args.iter().map(String::as_str));

    let mut obj = Map::new();
    obj.insert("type".to_string(), json!("local"));
    obj.insert("command".to_string(), json!(command));
    obj.insert("enabled".to_string(), json!(true));
    if let Some(env) = env {
        obj.insert("environment".to_string(), Value::Object(env.clone()));
    }
    Value::Object(obj)
}
