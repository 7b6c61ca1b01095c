// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture log implementation.

use crate::invocation::{CapturedInvocation, InvocationKind, InvocationOutcome};
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Capture log for recording invocations.
///
/// Clones share the same underlying record, so a clone can be moved into
/// each hook body while the original is kept for inspection.
pub struct CaptureLog {
    start: Instant,
    invocations: Arc<Mutex<Vec<CapturedInvocation>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl CaptureLog {
    /// Create a new in-memory capture log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            invocations: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a capture log that also writes to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            start: Instant::now(),
            invocations: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record an invocation
    pub fn record(
        &self,
        kind: InvocationKind,
        label: impl Into<String>,
        outcome: InvocationOutcome,
    ) {
        let mut invocations = self.invocations.lock();
        let invocation = CapturedInvocation {
            seq: invocations.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            kind,
            label: label.into(),
            outcome,
        };

        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&invocation) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }

        invocations.push(invocation);
    }

    /// Get all captured invocations
    pub fn invocations(&self) -> Vec<CapturedInvocation> {
        self.invocations.lock().clone()
    }

    /// Labels of all captured invocations, in invocation order
    pub fn labels(&self) -> Vec<String> {
        self.invocations
            .lock()
            .iter()
            .map(|i| i.label.clone())
            .collect()
    }

    /// Find invocations of a given kind
    pub fn find_by_kind(&self, kind: InvocationKind) -> Vec<CapturedInvocation> {
        self.invocations
            .lock()
            .iter()
            .filter(|i| i.kind == kind)
            .cloned()
            .collect()
    }

    /// Get the total number of invocations
    pub fn len(&self) -> usize {
        self.invocations.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.invocations.lock().is_empty()
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CaptureLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            invocations: Arc::clone(&self.invocations),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
