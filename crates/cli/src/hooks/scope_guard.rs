// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation for hooks declared inside example groups.
//!
//! Suite hooks only make sense on the top-level configuration. A suite hook
//! declared on a group is dropped with a warning instead of failing the run.

use std::sync::Arc;

use super::definition::{HookBody, HookScope, HookSignature};
use crate::output_diagnostic::DiagnosticSink;

/// Warning text for a suite hook declared on an example group.
pub fn misuse_message(signature: HookSignature) -> String {
    format!(
        "`{signature}` hooks are only supported on the top-level configuration. \
         This `{signature}` hook, registered on an example group, will be ignored."
    )
}

/// Screens hook registrations coming from an example group.
#[derive(Clone)]
pub struct ScopeGuard {
    sink: Arc<dyn DiagnosticSink>,
}

impl ScopeGuard {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Admit or drop a group-level registration.
    ///
    /// Returns the body when the hook may proceed to the per-example
    /// subsystem. Suite hooks are dropped and reported once.
    pub fn admit(&self, signature: HookSignature, body: HookBody) -> Option<HookBody> {
        match signature.scope {
            HookScope::Suite => {
                tracing::debug!(%signature, "dropping suite hook declared on example group");
                self.sink.warn(&misuse_message(signature));
                drop(body);
                None
            }
            HookScope::ExampleGroupOrExample => Some(body),
        }
    }
}

impl std::fmt::Debug for ScopeGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "scope_guard_tests.rs"]
mod tests;
