//! Warp client implementation.
//!
//! Warp reads a flat object keyed by server name, without a wrapper.

use serde_json::{Map, Value, json};

use crate::client::{ConfigRenderer, Rendered};
use crate::master::{MasterConfig, ServerKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct WarpRenderer;

impl ConfigRenderer for WarpRenderer {
    fn id(&self) -> &'static str {
        "warp"
    }

    fn render(&self, master: &MasterConfig) -> Rendered {
        let mut map = Map::new();
        for server in &master.mcp_servers {
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
        Rendered::new(Value::Object(map))
    }
}

fn render_server(program: &str, args: &[String], env: Option<&Map<String, Value>>) -> Value {
    let mut obj = Map::new();
    obj.insert("command".to_string(), json!(program));
    if !args.is_empty() {
        obj.insert("args".to_string(), json!(args));
    }
    if let Some(env) = env {
        obj.insert("env".to_string(), Value::Object(env.clone()));
    }
    Value::Object(obj)
}
