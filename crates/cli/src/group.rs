// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Example groups: the test-group definition surface.
//!
//! Hooks declared on a group pass through a [`ScopeGuard`]. Suite hooks are
//! dropped with a warning; the rest are kept for the per-example hook
//! subsystem and are not run here.

use serde::Serialize;

use crate::hooks::{
    HookBody, HookDefinition, HookDirection, HookError, HookPosition, HookResult, HookScope,
    HookSignature, ScopeGuard,
};

/// Owned example body
pub type ExampleBody = Box<dyn Fn() -> HookResult + Send + Sync + 'static>;

/// A single example
pub struct Example {
    description: String,
    body: ExampleBody,
}

impl Example {
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the example body
    pub fn run(&self) -> Result<(), HookError> {
        (self.body)()
    }
}

impl std::fmt::Debug for Example {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Example")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A named group of examples
#[derive(Debug)]
pub struct ExampleGroup {
    name: String,
    guard: ScopeGuard,
    examples: Vec<Example>,
    example_hooks: Vec<HookDefinition>,
    next_sequence: u64,
}

impl ExampleGroup {
    /// Create an empty group
    pub fn new(name: impl Into<String>, guard: ScopeGuard) -> Self {
        Self {
            name: name.into(),
            guard,
            examples: Vec::new(),
            example_hooks: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Create a group and run `define` against it
    pub fn describe(
        name: impl Into<String>,
        guard: ScopeGuard,
        define: impl FnOnce(&mut ExampleGroup),
    ) -> Self {
        let mut group = Self::new(name, guard);
        define(&mut group);
        group
    }

    /// Declare a hook on this group.
    ///
    /// Suite hooks are dropped with a warning. Never fails.
    pub fn hook(
        &mut self,
        direction: HookDirection,
        scope: HookScope,
        position: HookPosition,
        body: HookBody,
    ) {
        self.hook_named(direction, scope, position, None, body);
    }

    /// Declare a named hook on this group
    pub fn hook_named(
        &mut self,
        direction: HookDirection,
        scope: HookScope,
        position: HookPosition,
        name: Option<String>,
        body: HookBody,
    ) {
        let Some(body) = self.guard.admit(HookSignature::new(direction, scope), body) else {
            return;
        };
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.example_hooks.push(HookDefinition::new(
            direction, scope, position, sequence, name, body,
        ));
    }

    /// Shorthand for a `before` hook at normal position
    pub fn before<F>(&mut self, scope: HookScope, body: F)
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        self.hook(HookDirection::Before, scope, HookPosition::Normal, Box::new(body));
    }

    /// Shorthand for an `after` hook at normal position
    pub fn after<F>(&mut self, scope: HookScope, body: F)
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        self.hook(HookDirection::After, scope, HookPosition::Normal, Box::new(body));
    }

    /// Add an example
    pub fn example<F>(&mut self, description: impl Into<String>, body: F)
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        self.add_example(description, Box::new(body));
    }

    /// Add an example from an already boxed body
    pub fn add_example(&mut self, description: impl Into<String>, body: ExampleBody) {
        self.examples.push(Example {
            description: description.into(),
            body,
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Non-suite hooks kept for the per-example hook subsystem
    pub fn example_hooks(&self) -> &[HookDefinition] {
        &self.example_hooks
    }

    /// Run every example in declaration order.
    ///
    /// A failing example is recorded and the next one still runs. In dry-run
    /// mode no example body is invoked.
    pub fn run(&self, dry_run: bool) -> GroupReport {
        let results = self
            .examples
            .iter()
            .map(|example| {
                let status = if dry_run {
                    ExampleStatus::Skipped
                } else {
                    match example.run() {
                        Ok(()) => ExampleStatus::Passed,
                        Err(e) => {
                            tracing::debug!(
                                group = %self.name,
                                example = %example.description,
                                error = %e,
                                "example failed"
                            );
                            ExampleStatus::Failed {
                                message: e.to_string(),
                            }
                        }
                    }
                };
                ExampleResult {
                    description: example.description.clone(),
                    status,
                }
            })
            .collect();

        GroupReport {
            name: self.name.clone(),
            results,
        }
    }
}

/// Result of running one group
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub results: Vec<ExampleResult>,
}

impl GroupReport {
    pub fn count(&self, pred: impl Fn(&ExampleStatus) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.status)).count()
    }
}

/// Result of running one example
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExampleResult {
    pub description: String,
    #[serde(flatten)]
    pub status: ExampleStatus,
}

/// Example status
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExampleStatus {
    Passed,
    Failed { message: String },
    Skipped,
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
