//! Well-known file locations, all relative to the user's home directory.

use std::path::{Path, PathBuf};

/// A generated document written over the previous file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverwriteTarget {
    pub label: &'static str,
    pub path: PathBuf,
}

/// A client state file whose `mcpServers` key is replaced in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTarget {
    pub label: &'static str,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct TargetPaths {
    home_dir: PathBuf,
}

impl TargetPaths {
    pub fn new(home_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: home_dir.into(),
        }
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Directory holding the master configuration.
    pub fn shared_dir(&self) -> PathBuf {
        self.home_dir.join(".ccs").join("shared")
    }

    pub fn master_config_path(&self) -> PathBuf {
        self.shared_dir().join("master-config.json")
    }

    pub fn shared_settings_path(&self) -> PathBuf {
        self.shared_dir().join("settings.json")
    }

    pub fn claude_settings_path(&self) -> PathBuf {
        self.home_dir.join(".claude").join("settings.json")
    }

    pub fn opencode_config_path(&self) -> PathBuf {
        self.home_dir.join(".opencode").join("opencode.json")
    }

    pub fn warp_config_path(&self) -> PathBuf {
        self.home_dir.join(".warp").join("mcp_config.json")
    }

    pub fn claude_main_path(&self) -> PathBuf {
        self.home_dir.join(".claude.json")
    }

    pub fn ccs_claude_path(&self) -> PathBuf {
        self.home_dir.join(".ccs").join(".claude").join(".claude.json")
    }

    pub fn claude_instance_path(&self) -> PathBuf {
        self.home_dir
            .join(".ccs")
            .join("instances")
            .join("claude")
            .join(".claude.json")
    }

    /// Both full-overwrite targets for the Claude Code document.
    pub fn claude_code_targets(&self) -> [OverwriteTarget; 2] {
        [
            OverwriteTarget {
                label: "CCS Shared",
                path: self.shared_settings_path(),
            },
            OverwriteTarget {
                label: "Claude Code",
                path: self.claude_settings_path(),
            },
        ]
    }

    pub fn opencode_target(&self) -> OverwriteTarget {
        OverwriteTarget {
            label: "OpenCode",
            path: self.opencode_config_path(),
        }
    }

    pub fn warp_target(&self) -> OverwriteTarget {
        OverwriteTarget {
            label: "Warp",
            path: self.warp_config_path(),
        }
    }

    /// Client state files receiving the Claude Code server map.
    pub fn merge_targets(&self) -> [MergeTarget; 3] {
        [
            MergeTarget {
                label: "Claude Code Main",
                path: self.claude_main_path(),
            },
            MergeTarget {
                label: "CCS Claude Config",
                path: self.ccs_claude_path(),
            },
            MergeTarget {
                label: "Claude Code Instance",
                path: self.claude_instance_path(),
            },
        ]
    }
}
