// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! suitehooks binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use suitehooks::capture::CaptureLog;
use suitehooks::cli::Cli;
use suitehooks::loader::{build_suite, load_suite};
use suitehooks::output::write_summary;
use suitehooks::output_diagnostic::print_error;
use suitehooks::{exit_codes, Configuration, Runner};

fn main() {
    // RUST_LOG=debug for hook-level events
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let suite = match load_suite(&cli.suite) {
        Ok(suite) => suite,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FAILURE);
        }
    };

    let capture = match cli.capture.as_deref().map(CaptureLog::with_file).transpose() {
        Ok(capture) => capture,
        Err(e) => {
            print_error(format_args!("failed to open capture file: {}", e));
            std::process::exit(exit_codes::FAILURE);
        }
    };

    let mut config = Configuration::new();
    if cli.dry_run {
        config.set_dry_run(true);
    }
    let groups = build_suite(&suite, &mut config, capture.as_ref());
    tracing::debug!(suite = %suite.name, groups = groups.len(), "suite loaded");

    match Runner::new(config, groups).run() {
        Ok(summary) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = write_summary(&mut stdout, &summary, cli.output_format) {
                print_error(format_args!("failed to write summary: {}", e));
                std::process::exit(exit_codes::FAILURE);
            }
            std::process::exit(summary.exit_code());
        }
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}
