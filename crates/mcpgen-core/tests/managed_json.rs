use serde_json::{Map, Value, json};
use tempfile::TempDir;

use mcpgen_core::config::managed_json::{merge_mcp_servers, replace_field, write_json_document};

fn servers(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[test]
fn merge_replaces_servers_and_preserves_other_keys() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join(".claude.json");
    std::fs::write(
        &config_path,
        serde_json::to_vec_pretty(&json!({"otherKey": 1, "mcpServers": {"old": {}}})).unwrap(),
    )
    .unwrap();

    merge_mcp_servers(&config_path, &servers(json!({"new": {}}))).unwrap();

    assert_eq!(
        read_json(&config_path),
        json!({"otherKey": 1, "mcpServers": {"new": {}}})
    );
}

#[test]
fn merge_into_missing_file_creates_parents() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("instances/claude/.claude.json");

    let merged = merge_mcp_servers(&config_path, &servers(json!({"new": {}}))).unwrap();

    assert_eq!(Value::Object(merged), json!({"mcpServers": {"new": {}}}));
    assert_eq!(read_json(&config_path), json!({"mcpServers": {"new": {}}}));
}

#[test]
fn merge_into_corrupt_file_starts_empty() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join(".claude.json");
    std::fs::write(&config_path, "{ not json").unwrap();

    merge_mcp_servers(&config_path, &servers(json!({"new": {}}))).unwrap();

    assert_eq!(read_json(&config_path), json!({"mcpServers": {"new": {}}}));
}

#[test]
fn merge_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join(".claude.json");
    std::fs::write(&config_path, r#"{"projects": {"/tmp/p": {"trusted": true}}}"#).unwrap();
    let desired = servers(json!({"fs": {"type": "stdio", "command": "npx"}}));

    merge_mcp_servers(&config_path, &desired).unwrap();
    let first = std::fs::read(&config_path).unwrap();
    merge_mcp_servers(&config_path, &desired).unwrap();
    let second = std::fs::read(&config_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn replace_field_accepts_any_key() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("state.json");
    std::fs::write(&config_path, r#"{"theme": "dark"}"#).unwrap();

    replace_field(&config_path, "mcp", json!({"a": 1})).unwrap();

    assert_eq!(
        read_json(&config_path),
        json!({"theme": "dark", "mcp": {"a": 1}})
    );
}

#[test]
fn overwrite_discards_existing_content() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join(".warp/mcp_config.json");
    std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    std::fs::write(&config_path, r#"{"stale": true}"#).unwrap();

    write_json_document(&config_path, &json!({"fresh": {"command": "npx"}})).unwrap();

    assert_eq!(read_json(&config_path), json!({"fresh": {"command": "npx"}}));
}

#[test]
fn overwrite_uses_two_space_indent() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("out.json");

    write_json_document(&config_path, &json!({"a": {"b": 1}})).unwrap();

    let text = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(text, "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
}
