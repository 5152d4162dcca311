//! List command implementation.
//!
//! Read-only summary of the servers declared in the master configuration.

use crate::master::MasterConfig;

/// Shown instead of a command line for servers without one.
pub const NO_COMMAND: &str = "NO COMMAND";

/// One row of the server listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerListing {
    /// 1-based position in the master configuration
    pub index: usize,
    pub name: String,
    /// Space-joined command, or `NO COMMAND`
    pub command: String,
    /// Number of environment variables, when any are declared
    pub env_count: Option<usize>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ListCommand;

impl ListCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, master: &MasterConfig) -> Vec<ServerListing> {
        master
            .mcp_servers
            .iter()
            .enumerate()
            .map(|(idx, server)| ServerListing {
                index: idx + 1,
                name: server.display_name().to_string(),
                command: server
                    .command_line()
                    .unwrap_or_else(|| NO_COMMAND.to_string()),
                env_count: Some(server.env_count()).filter(|count| *count > 0),
            })
            .collect()
    }

    /// Human-readable rendering of the listing.
    pub fn render(&self, master: &MasterConfig) -> String {
        let rows = self.execute(master);
        let mut out = format!("\n📋 Configured MCP Servers ({}):\n\n", rows.len());
        for row in rows {
            out.push_str(&format!("{:2}. {}\n", row.index, row.name));
            out.push_str(&format!("    Command: {}\n", row.command));
            if let Some(count) = row.env_count {
                out.push_str(&format!("    Environment: {} variable(s)\n", count));
            }
            out.push('\n');
        }
        out
    }
}
