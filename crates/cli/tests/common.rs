// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A `shelf` command isolated to `temp`: own state dir, no config file,
/// no inherited password, plain output.
pub fn shelf(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("shelf");
    cmd.env("SHELF_STATE_DIR", temp.path().join("state"))
        .env("SHELF_CONFIG", temp.path().join("config.toml"))
        .env_remove("SHELF_APP_PASSWORD")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Stdout of a successful command.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Parsed JSON stdout of a successful command.
pub fn json_of(cmd: &mut Command) -> serde_json::Value {
    serde_json::from_str(stdout_of(cmd).trim()).unwrap()
}

/// Creates a collection and returns its id.
pub fn create_collection(temp: &TempDir, name: &str) -> String {
    let col = json_of(shelf(temp).args(["new", name, "-o", "json"]));
    col["id"]["id"].as_str().unwrap().to_string()
}

/// Adds an item to the active collection and returns its id.
pub fn add_item(temp: &TempDir, title: &str) -> String {
    let item = json_of(shelf(temp).args(["add", title, "-o", "json"]));
    item["id"]["id"].as_str().unwrap().to_string()
}
