//! The `lang-router` binary: stdout carries only the JSON product.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

const SITE: &str = r#"
site_url = "https://example.com/"

[routing]
use_language_prefix_in_path = true
hide_default_language_prefix = true

[observability]
log_level = "debug"

[[languages]]
slug = "en"
name = "English"
locale = "en_US"
default = true

[[languages]]
slug = "fr"
name = "Français"
locale = "fr_FR"
"#;

const RULES: &str = r#"{
    "([^/]+)/?$": "index.php?lang=$matches[1]",
    "author/([^/]+)/?$": "index.php?author_name=$matches[1]",
    "^privacy/?$": "index.php?pagename=privacy"
}"#;

const MENU: &str = r#"[
    {"id": 1, "title": "Home", "order_index": 0},
    {"id": 2, "title": "Languages", "order_index": 1, "language_switcher": {}}
]"#;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lang-router"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("binary runs")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "exit {:?}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_compile_prints_json_table() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("site.toml"), SITE).unwrap();
    fs::write(dir.path().join("rules.json"), RULES).unwrap();

    let output = run(dir.path(), &["compile", "--config", "site.toml", "--rules", "rules.json"]);
    let table = stdout_json(&output);

    assert_eq!(table["fr/?$"], "index.php?lang=fr");
    assert_eq!(table["fr/author/([^/]+)/?$"], "index.php?lang=fr&author_name=$matches[1]");
    assert!(table.get("([^/]+)/?$").is_none());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_expand_prints_json_menu() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("site.toml"), SITE).unwrap();
    fs::write(dir.path().join("menu.json"), MENU).unwrap();

    let output = run(
        dir.path(),
        &["--config", "site.toml", "expand", "--menu", "menu.json", "--current", "fr"],
    );
    let items = stdout_json(&output);

    let titles: Vec<&str> = items
        .as_array()
        .expect("array of items")
        .iter()
        .filter_map(|item| item["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Home", "English", "Français"]);
    assert_eq!(items[2]["url"], "https://example.com/fr/");
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["compile", "--config", "absent.toml", "--rules", "rules.json"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
