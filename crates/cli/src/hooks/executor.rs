// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite hook execution engine.
//!
//! Runs the before-chain, the protected block and the after-chain. The first
//! error by stage order is returned unchanged; the after-chain always runs to
//! completion.

use std::cell::Cell;

use super::definition::{HookDirection, HookError};
use super::registry::HookRegistry;

/// Result of running one stage of the suite
#[derive(Debug)]
pub enum StageOutcome {
    /// Every body in the stage succeeded
    Completed,
    /// The stage failed; carries the first error it produced
    Aborted(HookError),
}

/// How a chain reacts to a failing body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainMode {
    /// Stop at the first failure
    FailFast,
    /// Keep going; report the first failure at the end
    RunAll,
}

impl ChainMode {
    /// Setup stops early, teardown never does.
    pub fn for_direction(direction: HookDirection) -> Self {
        match direction {
            HookDirection::Before => ChainMode::FailFast,
            HookDirection::After => ChainMode::RunAll,
        }
    }
}

/// Final status of a suite run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

/// Where a suite run currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuitePhase {
    Idle,
    RunningBefore,
    RunningBlock,
    RunningAfter,
    Done(RunStatus),
}

/// Runs suite hooks around a protected block
#[derive(Debug)]
pub struct HookExecutor<'a> {
    registry: &'a HookRegistry,
    dry_run: bool,
    phase: Cell<SuitePhase>,
}

impl<'a> HookExecutor<'a> {
    /// Create an executor over a registry
    pub fn new(registry: &'a HookRegistry) -> Self {
        Self {
            registry,
            dry_run: false,
            phase: Cell::new(SuitePhase::Idle),
        }
    }

    /// Set dry-run mode; no hook body is invoked when set
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn phase(&self) -> SuitePhase {
        self.phase.get()
    }

    /// Run `block` wrapped in the suite hooks.
    ///
    /// In dry-run mode the block is invoked directly and no hook runs.
    pub fn run_with_suite_hooks<T, F>(&self, block: F) -> Result<T, HookError>
    where
        F: FnOnce() -> Result<T, HookError>,
    {
        if self.dry_run {
            tracing::debug!("dry run: suite hooks skipped");
            let result = block();
            self.finish(&result);
            return result;
        }

        self.enter(SuitePhase::RunningBefore);
        let mut result = match self.run_chain(HookDirection::Before) {
            StageOutcome::Aborted(error) => Err(error),
            StageOutcome::Completed => {
                self.enter(SuitePhase::RunningBlock);
                block()
            }
        };

        self.enter(SuitePhase::RunningAfter);
        if let StageOutcome::Aborted(error) = self.run_chain(HookDirection::After) {
            result = match result {
                Ok(_) => Err(error),
                Err(primary) => {
                    tracing::warn!(%primary, discarded = %error, "after(:suite) error discarded");
                    Err(primary)
                }
            };
        }

        self.finish(&result);
        result
    }

    /// Run every hook in one direction's chain.
    pub fn run_chain(&self, direction: HookDirection) -> StageOutcome {
        let mode = ChainMode::for_direction(direction);
        let mut first_error: Option<HookError> = None;

        for hook in self.registry.chain(direction) {
            tracing::trace!(
                signature = %hook.signature(),
                sequence = hook.sequence(),
                name = hook.name().unwrap_or(""),
                "running hook"
            );
            let Err(error) = hook.invoke() else {
                continue;
            };
            tracing::debug!(signature = %hook.signature(), %error, "hook failed");

            if first_error.is_some() {
                tracing::warn!(%error, "{} error discarded", hook.signature());
                continue;
            }
            if mode == ChainMode::FailFast {
                return StageOutcome::Aborted(error);
            }
            first_error = Some(error);
        }

        match first_error {
            Some(error) => StageOutcome::Aborted(error),
            None => StageOutcome::Completed,
        }
    }

    fn enter(&self, phase: SuitePhase) {
        tracing::trace!(from = ?self.phase.get(), to = ?phase, "suite phase");
        self.phase.set(phase);
    }

    fn finish<T>(&self, result: &Result<T, HookError>) {
        let status = match result {
            Ok(_) => RunStatus::Success,
            Err(_) => RunStatus::Failure,
        };
        self.enter(SuitePhase::Done(status));
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
