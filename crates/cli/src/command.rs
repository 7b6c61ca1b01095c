// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-command bodies for hooks and examples declared in suite files.

use std::process::{Command, Stdio};

use suitehooks_capture::{CaptureLog, InvocationKind, InvocationOutcome};
use thiserror::Error;

use crate::hooks::{HookBody, HookResult};

/// Shell used to run commands
pub const SHELL: &str = "/bin/sh";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to spawn `{command}`: {message}")]
    Spawn { command: String, message: String },

    #[error("`{command}` exited with status {code:?}: {stderr}")]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Run a command with `/bin/sh -c`, failing on a non-zero exit
pub fn run_shell(command: &str) -> Result<(), CommandError> {
    let output = Command::new(SHELL)
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| CommandError::Spawn {
            command: command.to_string(),
            message: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        tracing::debug!(command, stdout = %stdout.trim_end(), "command output");
    }

    if !output.status.success() {
        return Err(CommandError::NonZeroExit {
            command: command.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

/// Build a body that runs `command` and records the invocation in `capture`.
pub fn shell_body(
    command: impl Into<String>,
    kind: InvocationKind,
    label: impl Into<String>,
    capture: Option<CaptureLog>,
) -> HookBody {
    let command = command.into();
    let label = label.into();
    Box::new(move || -> HookResult {
        let result = run_shell(&command);
        if let Some(ref capture) = capture {
            capture.record(kind, label.clone(), InvocationOutcome::from_result(&result));
        }
        result.map_err(Into::into)
    })
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
