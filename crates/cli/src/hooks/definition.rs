// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook definition types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error produced by a hook body or a protected block.
///
/// Boxed so the caller of a run receives the original error value and can
/// downcast it to its concrete type.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of invoking a hook body
pub type HookResult = Result<(), HookError>;

/// Owned hook body, invoked for side effects only
pub type HookBody = Box<dyn Fn() -> HookResult + Send + Sync + 'static>;

/// Which side of the run a hook belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookDirection {
    Before,
    After,
}

impl HookDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookDirection::Before => "before",
            HookDirection::After => "after",
        }
    }
}

impl fmt::Display for HookDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a hook runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookScope {
    /// Once per test run
    Suite,
    /// Once per group or per example; owned by the per-example hook subsystem
    #[serde(alias = "example", alias = "each", alias = "context", alias = "all")]
    ExampleGroupOrExample,
}

impl HookScope {
    /// Symbol used in hook signatures, e.g. `:suite`
    pub fn symbol(&self) -> &'static str {
        match self {
            HookScope::Suite => ":suite",
            HookScope::ExampleGroupOrExample => ":example",
        }
    }
}

/// Priority of a hook within its direction's chain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPosition {
    /// Run as early as possible, ahead of earlier prepends
    Prepend,
    /// Plain registration
    #[default]
    Normal,
    /// Run strictly last, after all normal hooks
    Append,
}

/// Direction and scope of a hook, rendered as `before(:suite)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HookSignature {
    pub direction: HookDirection,
    pub scope: HookScope,
}

impl HookSignature {
    pub fn new(direction: HookDirection, scope: HookScope) -> Self {
        Self { direction, scope }
    }

    pub fn suite(direction: HookDirection) -> Self {
        Self::new(direction, HookScope::Suite)
    }
}

impl fmt::Display for HookSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.direction, self.scope.symbol())
    }
}

/// A registered hook.
///
/// Immutable once created; the body is owned exclusively by this definition.
pub struct HookDefinition {
    direction: HookDirection,
    scope: HookScope,
    position: HookPosition,
    sequence: u64,
    name: Option<String>,
    body: HookBody,
}

impl HookDefinition {
    pub(crate) fn new(
        direction: HookDirection,
        scope: HookScope,
        position: HookPosition,
        sequence: u64,
        name: Option<String>,
        body: HookBody,
    ) -> Self {
        Self {
            direction,
            scope,
            position,
            sequence,
            name,
            body,
        }
    }

    pub fn direction(&self) -> HookDirection {
        self.direction
    }

    pub fn scope(&self) -> HookScope {
        self.scope
    }

    pub fn position(&self) -> HookPosition {
        self.position
    }

    /// Registration sequence number, used for tie-breaks
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn signature(&self) -> HookSignature {
        HookSignature::new(self.direction, self.scope)
    }

    /// Invoke the hook body
    pub fn invoke(&self) -> HookResult {
        (self.body)()
    }
}

impl fmt::Debug for HookDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookDefinition")
            .field("direction", &self.direction)
            .field("scope", &self.scope)
            .field("position", &self.position)
            .field("sequence", &self.sequence)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
