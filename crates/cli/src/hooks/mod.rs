// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite-scoped lifecycle hooks.
//!
//! Hooks registered here run once before and once after a whole test run,
//! with prepend/append priorities and guaranteed teardown.

pub mod definition;
pub mod executor;
pub mod registry;
pub mod scope_guard;

pub use definition::{
    HookBody, HookDefinition, HookDirection, HookError, HookPosition, HookResult, HookScope,
    HookSignature,
};
pub use executor::{ChainMode, HookExecutor, RunStatus, StageOutcome, SuitePhase};
pub use registry::{HookRegistry, Registration};
pub use scope_guard::{misuse_message, ScopeGuard};

#[cfg(test)]
pub(crate) mod test_helpers;
