// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for hook tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use parking_lot::Mutex;
use std::sync::Arc;

use super::definition::{HookBody, HookError, HookResult};

/// Ordered record of labels pushed by hook bodies.
pub type Sequence = Arc<Mutex<Vec<&'static str>>>;

pub fn sequence() -> Sequence {
    Arc::new(Mutex::new(Vec::new()))
}

/// Body that pushes `label` onto `seq`.
pub fn push(seq: &Sequence, label: &'static str) -> HookBody {
    let seq = Arc::clone(seq);
    Box::new(move || -> HookResult {
        seq.lock().push(label);
        Ok(())
    })
}

/// Body that pushes `label` onto `seq`, then fails with `message`.
pub fn push_then_fail(seq: &Sequence, label: &'static str, message: &'static str) -> HookBody {
    let seq = Arc::clone(seq);
    Box::new(move || -> HookResult {
        seq.lock().push(label);
        Err(message.into())
    })
}

/// Body that does nothing.
pub fn noop() -> HookBody {
    Box::new(|| -> HookResult { Ok(()) })
}

/// Body that fails with [`DivideByZero`].
pub fn divide_by_zero() -> HookBody {
    Box::new(|| -> HookResult { Err(DivideByZero.into()) })
}

/// Concrete error type for checking errors come back unwrapped.
#[derive(Debug, thiserror::Error)]
#[error("divided by 0")]
pub struct DivideByZero;

/// Assert that `error` is a [`DivideByZero`].
pub fn assert_divide_by_zero(error: &HookError) {
    assert!(
        error.downcast_ref::<DivideByZero>().is_some(),
        "expected DivideByZero, got: {:?}",
        error
    );
}

pub fn snapshot(seq: &Sequence) -> Vec<&'static str> {
    seq.lock().clone()
}
