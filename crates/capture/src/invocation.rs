// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured invocation data types.

use super::duration_serde;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, SystemTime};

/// A single recorded hook or example invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedInvocation {
    /// Sequence number, starting at zero
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since capture started
    #[serde(rename = "elapsed_us", with = "duration_serde")]
    pub elapsed: Duration,

    /// What kind of body ran
    pub kind: InvocationKind,

    /// Caller-supplied label (hook name, example description, ...)
    pub label: String,

    /// How the body finished
    pub outcome: InvocationOutcome,
}

/// Kind of body that was invoked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationKind {
    BeforeSuite,
    AfterSuite,
    Example,
}

impl fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationKind::BeforeSuite => write!(f, "before(:suite)"),
            InvocationKind::AfterSuite => write!(f, "after(:suite)"),
            InvocationKind::Example => write!(f, "example"),
        }
    }
}

/// Result of an invocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InvocationOutcome {
    Passed,
    Failed { message: String },
}

impl InvocationOutcome {
    /// Build an outcome from a body's result, keeping only the error message.
    pub fn from_result<T, E: fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => InvocationOutcome::Passed,
            Err(e) => InvocationOutcome::Failed {
                message: e.to_string(),
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, InvocationOutcome::Failed { .. })
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
