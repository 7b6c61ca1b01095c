// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level configuration object.
//!
//! Owns the suite hook registry, the dry-run flag and the diagnostic sink for
//! one run. Suite hooks may only be registered here; groups created through
//! [`Configuration::describe`] share its warning sink.

use std::sync::Arc;

use crate::group::ExampleGroup;
use crate::hooks::{
    HookBody, HookDefinition, HookDirection, HookError, HookExecutor, HookPosition, HookRegistry,
    HookResult, HookScope, Registration, ScopeGuard,
};
use crate::output_diagnostic::{DiagnosticSink, StderrSink};

/// Configuration for one run
pub struct Configuration {
    registry: HookRegistry,
    dry_run: bool,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Configuration {
    /// Create a configuration that warns on stderr
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(StderrSink))
    }

    /// Create a configuration with a custom warning sink
    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            registry: HookRegistry::new(),
            dry_run: false,
            diagnostics,
        }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    pub fn diagnostics(&self) -> Arc<dyn DiagnosticSink> {
        Arc::clone(&self.diagnostics)
    }

    /// Register a suite hook, returning its sequence number
    pub fn register(
        &mut self,
        direction: HookDirection,
        position: HookPosition,
        body: HookBody,
    ) -> u64 {
        self.registry.register_suite(direction, position, None, body)
    }

    /// Register a named suite hook
    pub fn register_named(
        &mut self,
        direction: HookDirection,
        position: HookPosition,
        name: impl Into<String>,
        body: HookBody,
    ) -> u64 {
        self.registry
            .register_suite(direction, position, Some(name.into()), body)
    }

    /// Register a hook of any scope.
    ///
    /// Non-suite hooks are returned for the per-example hook subsystem.
    pub fn hook(
        &mut self,
        direction: HookDirection,
        scope: HookScope,
        position: HookPosition,
        body: HookBody,
    ) -> Option<HookDefinition> {
        match self.registry.register(direction, scope, position, body) {
            Registration::Stored { .. } => None,
            Registration::Delegated(definition) => Some(definition),
        }
    }

    pub fn before_suite<F>(&mut self, body: F) -> u64
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        self.register(HookDirection::Before, HookPosition::Normal, Box::new(body))
    }

    pub fn prepend_before_suite<F>(&mut self, body: F) -> u64
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        self.register(HookDirection::Before, HookPosition::Prepend, Box::new(body))
    }

    /// Same as [`Configuration::before_suite`]
    pub fn append_before_suite<F>(&mut self, body: F) -> u64
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        self.register(HookDirection::Before, HookPosition::Append, Box::new(body))
    }

    pub fn after_suite<F>(&mut self, body: F) -> u64
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        self.register(HookDirection::After, HookPosition::Normal, Box::new(body))
    }

    /// Same as [`Configuration::after_suite`]
    pub fn prepend_after_suite<F>(&mut self, body: F) -> u64
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        self.register(HookDirection::After, HookPosition::Prepend, Box::new(body))
    }

    pub fn append_after_suite<F>(&mut self, body: F) -> u64
    where
        F: Fn() -> HookResult + Send + Sync + 'static,
    {
        self.register(HookDirection::After, HookPosition::Append, Box::new(body))
    }

    /// Guard for hooks declared on example groups
    pub fn scope_guard(&self) -> ScopeGuard {
        ScopeGuard::new(self.diagnostics())
    }

    /// Define an example group that reports misplaced suite hooks here
    pub fn describe(
        &self,
        name: impl Into<String>,
        define: impl FnOnce(&mut ExampleGroup),
    ) -> ExampleGroup {
        ExampleGroup::describe(name, self.scope_guard(), define)
    }

    /// Run `block` wrapped in the registered suite hooks
    pub fn with_suite_hooks<T, F>(&self, block: F) -> Result<T, HookError>
    where
        F: FnOnce() -> Result<T, HookError>,
    {
        HookExecutor::new(&self.registry)
            .with_dry_run(self.dry_run)
            .run_with_suite_hooks(block)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("registry", &self.registry)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;
