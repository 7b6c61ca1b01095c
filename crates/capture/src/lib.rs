// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation capture and recording for test assertions.
//!
//! Records every hook and example body a suitehooks run invokes, in order,
//! so tests and tooling can check what ran and when.

mod duration_serde;
mod invocation;
mod log;

pub use invocation::{CapturedInvocation, InvocationKind, InvocationOutcome};
pub use log::CaptureLog;
