// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for suite file tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Create a temporary TOML suite file
pub fn write_suite(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Labels from a JSONL capture file, in invocation order
pub fn captured_labels(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["label"].as_str().unwrap().to_string()
        })
        .collect()
}

/// Suite with three before and three after hooks across every position
pub const ORDERED_SUITE: &str = r#"
name = "ordering"

[[hooks]]
type = "before"
name = "b1"
command = "true"

[[hooks]]
type = "before"
name = "b2"
command = "true"

[[hooks]]
type = "before"
position = "prepend"
name = "b3"
command = "true"

[[hooks]]
type = "after"
name = "a1"
command = "true"

[[hooks]]
type = "after"
name = "a2"
command = "true"

[[hooks]]
type = "after"
position = "append"
name = "a3"
command = "true"

[[groups]]
name = "group"

[[groups.examples]]
description = "works"
command = "true"
"#;
