// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite-scoped lifecycle hooks for test runners.
//!
//! `before(:suite)` hooks run once before any example group, `after(:suite)`
//! hooks run once after all of them, and a failure in either surfaces as the
//! run's primary error. Hooks are registered on a [`Configuration`], ordered
//! by position (prepend, normal, append), and executed by a
//! [`hooks::HookExecutor`] around the caller's block.
//!
//! The `suitehooks` binary drives the same engine from a TOML suite file whose
//! hooks and examples are shell commands.

pub use configuration::Configuration;
pub use runner::{exit_codes, RunSummary, Runner, World};

/// Re-exported capture types from suitehooks-capture crate.
pub mod capture {
    pub use suitehooks_capture::{CaptureLog, CapturedInvocation, InvocationKind, InvocationOutcome};
}

// Internal modules - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod command;
#[doc(hidden)]
pub mod config;
pub mod configuration;
pub mod group;
pub mod hooks;
#[doc(hidden)]
pub mod loader;
#[doc(hidden)]
pub mod output;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod runner;
