// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["suitehooks", "suite.toml"]).unwrap();
    assert_eq!(cli.suite, PathBuf::from("suite.toml"));
    assert!(!cli.dry_run);
    assert_eq!(cli.output_format, OutputFormat::Text);
    assert!(cli.capture.is_none());
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "suitehooks",
        "--dry-run",
        "--output-format",
        "json",
        "--capture",
        "/tmp/run.jsonl",
        "suite.toml",
    ])
    .unwrap();
    assert!(cli.dry_run);
    assert_eq!(cli.output_format, OutputFormat::Json);
    assert_eq!(cli.capture, Some(PathBuf::from("/tmp/run.jsonl")));
}

#[test]
fn test_suite_is_required() {
    assert!(Cli::try_parse_from(["suitehooks"]).is_err());
}

#[test]
fn test_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["suitehooks", "--output-format", "xml", "s.toml"]).is_err());
}
