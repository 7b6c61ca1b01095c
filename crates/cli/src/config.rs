// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite file configuration types (TOML).

use serde::{Deserialize, Serialize};

use crate::hooks::{HookDirection, HookPosition, HookScope, HookSignature};

fn default_scope() -> HookScope {
    HookScope::Suite
}

/// Top-level suite file
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Name for logging/debugging
    #[serde(default)]
    pub name: String,

    /// Skip every hook body and example body
    #[serde(default)]
    pub dry_run: bool,

    /// Hooks declared on the top-level configuration
    #[serde(default)]
    pub hooks: Vec<HookSpec>,

    /// Example groups, run in declaration order
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

/// A hook declaration backed by a shell command
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HookSpec {
    /// `before` or `after`
    #[serde(rename = "type")]
    pub direction: HookDirection,

    /// Defaults to `suite`
    #[serde(default = "default_scope")]
    pub scope: HookScope,

    /// `prepend`, `normal` (default) or `append`
    #[serde(default)]
    pub position: HookPosition,

    /// Label used in logs and captures (default: the command)
    #[serde(default)]
    pub name: Option<String>,

    /// Shell command run with `/bin/sh -c`
    pub command: String,
}

impl HookSpec {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.command)
    }

    pub fn signature(&self) -> HookSignature {
        HookSignature::new(self.direction, self.scope)
    }
}

/// An example group
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    pub name: String,

    /// Hooks declared on the group
    #[serde(default)]
    pub hooks: Vec<HookSpec>,

    #[serde(default)]
    pub examples: Vec<ExampleSpec>,
}

/// A single example backed by a shell command
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExampleSpec {
    pub description: String,
    pub command: String,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
