//! Master configuration schema.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value, json};

/// Name used for servers that do not declare one.
pub const UNKNOWN_SERVER_NAME: &str = "unknown";

/// The single source of truth all client documents are generated from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MasterConfig {
    /// Server definitions, in the order they are emitted
    #[serde(rename = "mcpServers")]
    pub mcp_servers: Vec<ServerDefinition>,

    /// Capability flags copied verbatim into the OpenCode document
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub tools: Option<Value>,

    /// Permission policies copied verbatim into the OpenCode document
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub permission: Option<Value>,
}

/// `Some` whenever the key is present, even when its value is `null`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl MasterConfig {
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Tool flags, falling back to `{"write": true, "bash": true}`.
    pub fn tools_or_default(&self) -> Value {
        match &self.tools {
            Some(tools) => tools.clone(),
            None => json!({ "write": true, "bash": true }),
        }
    }

    /// Permission policies, falling back to `{"edit": "ask"}`.
    pub fn permission_or_default(&self) -> Value {
        match &self.permission {
            Some(permission) => permission.clone(),
            None => json!({ "edit": "ask" }),
        }
    }
}

/// One server entry of the master configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Executable followed by its arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,

    /// Endpoint of an HTTP-based server; its presence alone marks the server
    /// as HTTP-based, whatever the value
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub server_url: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Map<String, Value>>,
}

/// How a server definition can be materialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServerKind<'a> {
    /// Spawned process with a non-empty command
    Process {
        name: &'a str,
        program: &'a str,
        args: &'a [String],
        env: Option<&'a Map<String, Value>>,
    },
    /// Addressed over HTTP; has no command to spawn
    Http { name: &'a str, url: Option<&'a str> },
    /// Neither spawnable nor addressable
    Malformed { name: &'a str },
}

impl ServerDefinition {
    /// Process-based definition, mostly useful in tests.
    pub fn process<I, S>(name: impl Into<String>, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            command: Some(command.into_iter().map(Into::into).collect()),
            server_url: None,
            env: None,
        }
    }

    /// HTTP-based definition, mostly useful in tests.
    pub fn http(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            command: None,
            server_url: Some(Value::String(url.into())),
            env: None,
        }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env
            .get_or_insert_with(Map::new)
            .insert(key.into(), Value::String(value.into()));
        self
    }

    /// The declared name, or `"unknown"`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_SERVER_NAME)
    }

    /// Classify the definition.
    ///
    /// A command wins over a URL. A command without a name cannot be keyed
    /// in any output and is treated as malformed.
    pub fn kind(&self) -> ServerKind<'_> {
        let display = self.display_name();
        match (self.command.as_deref(), self.name.as_deref()) {
            (Some([program, args @ ..]), Some(name)) => ServerKind::Process {
                name,
                program: program.as_str(),
                args,
                env: self.env.as_ref().filter(|env| !env.is_empty()),
            },
            (Some([_, ..]), None) => ServerKind::Malformed { name: display },
            _ => match &self.server_url {
                Some(url) => ServerKind::Http {
                    name: display,
                    url: url.as_str(),
                },
                None => ServerKind::Malformed { name: display },
            },
        }
    }

    /// Space-joined command line, `None` when there is no command.
    pub fn command_line(&self) -> Option<String> {
        self.command
            .as_ref()
            .filter(|command| !command.is_empty())
            .map(|command| command.join(" "))
    }

    /// Number of environment variables declared.
    pub fn env_count(&self) -> usize {
        self.env.as_ref().map_or(0, Map::len)
    }
}
