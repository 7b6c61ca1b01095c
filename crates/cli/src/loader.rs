// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite file loader: builds a configuration and example groups from TOML.

use std::path::{Path, PathBuf};

use suitehooks_capture::{CaptureLog, InvocationKind};
use thiserror::Error;

use crate::command::shell_body;
use crate::config::{HookSpec, SuiteConfig};
use crate::configuration::Configuration;
use crate::group::ExampleGroup;
use crate::hooks::{HookDirection, HookScope, HookSignature};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read suite file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid suite file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "invalid suite file {path}: `{signature}` hook `{label}` is not supported in suite \
         files; only `:suite` hooks are run."
    )]
    UnsupportedScope {
        path: PathBuf,
        signature: HookSignature,
        label: String,
    },
}

/// Warning for a non-suite hook skipped while building a suite.
pub fn unsupported_scope_message(signature: HookSignature, label: &str) -> String {
    format!(
        "`{signature}` hook `{label}` is not supported in suite files. \
         Only `:suite` hooks run; this hook will be ignored."
    )
}

/// Read and parse a suite file.
///
/// Hooks with a scope other than `suite` are rejected, top-level or grouped.
pub fn load_suite(path: &Path) -> Result<SuiteConfig, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let suite: SuiteConfig = toml::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let unsupported = suite
        .hooks
        .iter()
        .chain(suite.groups.iter().flat_map(|group| group.hooks.iter()))
        .find(|spec| spec.scope != HookScope::Suite);
    if let Some(spec) = unsupported {
        return Err(LoadError::UnsupportedScope {
            path: path.to_path_buf(),
            signature: spec.signature(),
            label: spec.label().to_string(),
        });
    }
    Ok(suite)
}

/// Register the suite file's hooks on `config` and build its groups.
///
/// Top-level hooks go to the configuration; group hooks go through the
/// group's scope guard, so suite hooks declared there are dropped with a
/// warning. Hooks of any other scope are skipped with one warning each.
/// Every body records into `capture` when one is given.
pub fn build_suite(
    suite: &SuiteConfig,
    config: &mut Configuration,
    capture: Option<&CaptureLog>,
) -> Vec<ExampleGroup> {
    if suite.dry_run {
        config.set_dry_run(true);
    }

    let diagnostics = config.diagnostics();
    let runnable = |spec: &HookSpec| {
        if spec.scope == HookScope::Suite {
            return true;
        }
        diagnostics.warn(&unsupported_scope_message(spec.signature(), spec.label()));
        false
    };

    for spec in suite.hooks.iter().filter(|spec| runnable(*spec)) {
        let body = shell_body(&spec.command, kind_of(spec), spec.label(), capture.cloned());
        config.register_named(spec.direction, spec.position, spec.label(), body);
    }

    suite
        .groups
        .iter()
        .map(|group_spec| {
            config.describe(group_spec.name.clone(), |group| {
                for spec in group_spec.hooks.iter().filter(|spec| runnable(*spec)) {
                    let body =
                        shell_body(&spec.command, kind_of(spec), spec.label(), capture.cloned());
                    group.hook_named(
                        spec.direction,
                        spec.scope,
                        spec.position,
                        Some(spec.label().to_string()),
                        body,
                    );
                }
                for example in &group_spec.examples {
                    let label = format!("{} {}", group_spec.name, example.description);
                    let body = shell_body(
                        &example.command,
                        InvocationKind::Example,
                        label,
                        capture.cloned(),
                    );
                    group.add_example(example.description.clone(), body);
                }
            })
        })
        .collect()
}

fn kind_of(spec: &HookSpec) -> InvocationKind {
    match spec.direction {
        HookDirection::Before => InvocationKind::BeforeSuite,
        HookDirection::After => InvocationKind::AfterSuite,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
