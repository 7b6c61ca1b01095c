// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration: example groups wrapped in suite hooks.

use serde::Serialize;

use crate::configuration::Configuration;
use crate::group::{ExampleGroup, ExampleStatus, GroupReport};
use crate::hooks::HookError;

/// Exit codes for a suite run
pub mod exit_codes {
    /// Every example passed (or was skipped in a dry run)
    pub const SUCCESS: i32 = 0;
    /// An example failed, or a hook or group discovery raised
    pub const FAILURE: i32 = 1;
}

/// Source of example groups, in run order
pub trait World {
    fn ordered_example_groups(&self) -> Result<Vec<&ExampleGroup>, HookError>;
}

impl World for Vec<ExampleGroup> {
    fn ordered_example_groups(&self) -> Result<Vec<&ExampleGroup>, HookError> {
        Ok(self.iter().collect())
    }
}

/// Outcome of a completed run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub dry_run: bool,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub groups: Vec<GroupReport>,
}

impl RunSummary {
    pub fn new(groups: Vec<GroupReport>, dry_run: bool) -> Self {
        let count = |pred: fn(&ExampleStatus) -> bool| -> usize {
            groups.iter().map(|g| g.count(pred)).sum()
        };
        Self {
            dry_run,
            passed: count(|s| matches!(s, ExampleStatus::Passed)),
            failed: count(|s| matches!(s, ExampleStatus::Failed { .. })),
            skipped: count(|s| matches!(s, ExampleStatus::Skipped)),
            groups,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        }
    }
}

/// Runs a world's example groups inside the configuration's suite hooks
#[derive(Debug)]
pub struct Runner<W: World> {
    config: Configuration,
    world: W,
}

impl<W: World> Runner<W> {
    pub fn new(config: Configuration, world: W) -> Self {
        Self { config, world }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Run every group once.
    ///
    /// Returns the primary hook or discovery error, if any; example failures
    /// are reported in the summary instead.
    pub fn run(&self) -> Result<RunSummary, HookError> {
        let dry_run = self.config.dry_run();
        self.config.with_suite_hooks(|| {
            let reports = self
                .world
                .ordered_example_groups()?
                .into_iter()
                .map(|group| {
                    tracing::debug!(group = group.name(), "running group");
                    group.run(dry_run)
                })
                .collect();
            Ok(RunSummary::new(reports, dry_run))
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
