use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

use mcpgen_core::commands::{SyncCommand, WriteMode};
use mcpgen_core::config::TargetPaths;
use mcpgen_core::context::AppContext;

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

fn write_master(home: &Path, master: Value) {
    let path = TargetPaths::new(home).master_config_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, serde_json::to_vec_pretty(&master).unwrap()).unwrap();
}

fn sample_master() -> Value {
    json!({
        "mcpServers": [
            {"name": "fs", "command": ["npx", "-y", "fs-server"], "env": {"ROOT": "/tmp"}},
            {"name": "remote", "serverUrl": "https://example.com/mcp", "env": {}},
            {"name": "broken", "env": {}}
        ],
        "tools": {"write": true, "bash": false}
    })
}

#[test]
fn sync_writes_every_target() {
    let temp = TempDir::new().unwrap();
    write_master(temp.path(), sample_master());
    let ctx = AppContext::new(temp.path().to_path_buf());
    let master = ctx.load_master().unwrap();

    let report = SyncCommand::from_context(&ctx).execute(&master);

    assert_eq!(report.server_count, 3);
    assert_eq!(report.targets.len(), 7);
    assert_eq!(report.failed().count(), 0);
    assert_eq!(
        report
            .targets
            .iter()
            .filter(|target| target.mode == WriteMode::Merge)
            .count(),
        3
    );
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("broken"));

    let paths = ctx.paths();
    let fs_entry = json!({
        "type": "stdio",
        "command": "npx",
        "args": ["-y", "fs-server"],
        "env": {"ROOT": "/tmp"}
    });

    let shared = read_json(&paths.shared_settings_path());
    assert_eq!(shared["mcpServers"], json!({"fs": fs_entry.clone()}));
    assert_eq!(read_json(&paths.claude_settings_path()), shared);

    let opencode = read_json(&paths.opencode_config_path());
    assert_eq!(opencode["tools"], json!({"write": true, "bash": false}));
    assert_eq!(opencode["permission"], json!({"edit": "ask"}));
    assert_eq!(
        opencode["mcp"]["fs"]["command"],
        json!(["npx", "-y", "fs-server"])
    );

    assert_eq!(
        read_json(&paths.warp_config_path()),
        json!({"fs": {"command": "npx", "args": ["-y", "fs-server"], "env": {"ROOT": "/tmp"}}})
    );

    for target in paths.merge_targets() {
        assert_eq!(
            read_json(&target.path),
            json!({"mcpServers": {"fs": fs_entry.clone()}})
        );
    }
}

#[test]
fn sync_preserves_client_state_in_merge_targets() {
    let temp = TempDir::new().unwrap();
    write_master(temp.path(), sample_master());
    let ctx = AppContext::new(temp.path().to_path_buf());
    let main_path = ctx.paths().claude_main_path();
    std::fs::write(
        &main_path,
        r#"{"numStartups": 42, "mcpServers": {"stale": {"command": "old"}}}"#,
    )
    .unwrap();

    let master = ctx.load_master().unwrap();
    SyncCommand::from_context(&ctx).execute(&master);

    let main = read_json(&main_path);
    assert_eq!(main["numStartups"], json!(42));
    let servers = main["mcpServers"].as_object().unwrap();
    assert!(servers.contains_key("fs"));
    assert!(!servers.contains_key("stale"));
}

#[test]
fn sync_twice_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    write_master(temp.path(), sample_master());
    let ctx = AppContext::new(temp.path().to_path_buf());
    let master = ctx.load_master().unwrap();
    let command = SyncCommand::from_context(&ctx);

    command.execute(&master);
    let snapshot: Vec<Vec<u8>> = command_outputs(&ctx);
    command.execute(&master);

    assert_eq!(snapshot, command_outputs(&ctx));
}

#[test]
fn failed_target_does_not_stop_the_run() {
    let temp = TempDir::new().unwrap();
    write_master(temp.path(), sample_master());
    // A plain file where the Warp directory should be
    std::fs::write(temp.path().join(".warp"), "").unwrap();
    let ctx = AppContext::new(temp.path().to_path_buf());
    let master = ctx.load_master().unwrap();

    let report = SyncCommand::from_context(&ctx).execute(&master);

    let failed: Vec<&str> = report.failed().map(|target| target.label).collect();
    assert_eq!(failed, ["Warp"]);
    for target in ctx.paths().merge_targets() {
        assert!(target.path.exists());
    }
}

fn command_outputs(ctx: &AppContext) -> Vec<Vec<u8>> {
    let paths = ctx.paths();
    let mut files = vec![
        paths.shared_settings_path(),
        paths.claude_settings_path(),
        paths.opencode_config_path(),
        paths.warp_config_path(),
    ];
    files.extend(paths.merge_targets().into_iter().map(|target| target.path));
    files
        .into_iter()
        .map(|path| std::fs::read(path).unwrap())
        .collect()
}
