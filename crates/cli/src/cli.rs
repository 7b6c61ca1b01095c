// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Run a suite file with suite-scoped before/after hooks
#[derive(Parser, Clone, Debug)]
#[command(name = "suitehooks", version, about)]
pub struct Cli {
    /// Suite file (TOML)
    #[arg(value_name = "SUITE")]
    pub suite: PathBuf,

    /// Report what would run without invoking any hook or example
    #[arg(long, env = "SUITEHOOKS_DRY_RUN")]
    pub dry_run: bool,

    /// Output format for the run summary
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Record every hook and example invocation to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub capture: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
