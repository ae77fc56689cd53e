// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write a ledgers JSON document to a temp file and return the handle
/// (keep the TempDir alive for the duration of the test).
pub fn write_ledgers(ledgers: &Value) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("ledgers.json");
    fs::write(&path, serde_json::to_string(ledgers)?)?;
    Ok((dir, path))
}

/// Minimal ledger record with the given name and accounts.
pub fn ledger(name: &str, left_account: &str, right_account: &str) -> Value {
    json!({
        "name": name,
        "currency": "USD",
        "plugin": "ilp-plugin-bells",
        "store": "memory",
        "left_account": left_account,
        "right_account": right_account
    })
}

/// Standard three-ledger ring fixture.
pub fn three_ring() -> Value {
    json!([
        ledger("L0", "alice", "bob"),
        ledger("L1", "carol", "dave"),
        ledger("L2", "erin", "frank")
    ])
}

/// Pull the value of an environment variable line out of a generated
/// service block, e.g. `env_value(&block, "CONNECTOR_LEDGERS")`.
pub fn env_value(block: &str, name: &str) -> Option<String> {
    let prefix = format!("      {}: ", name);
    block.lines().find_map(|line| {
        line.strip_prefix(prefix.as_str())
            .map(|v| v.trim_matches(|c| c == '\'' || c == '"').to_string())
    })
}

/// Split a document into its per-service blocks, keyed off the
/// `  ilp-kit<i>:` headers. Returns (header, blocks).
pub fn split_services(document: &str) -> (String, Vec<String>) {
    let mut header = String::new();
    let mut blocks: Vec<String> = Vec::new();

    for line in document.lines() {
        let is_service_start = line.starts_with("  ilp-kit") && line.ends_with(':');
        if is_service_start {
            blocks.push(String::new());
        }
        let target = match blocks.last_mut() {
            Some(block) => block,
            None => &mut header,
        };
        target.push_str(line);
        target.push('\n');
    }

    (header, blocks)
}
