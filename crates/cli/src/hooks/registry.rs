// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook registry for suite-scoped hooks.

use super::definition::{HookBody, HookDefinition, HookDirection, HookPosition, HookScope};

/// Outcome of a registration
#[derive(Debug)]
pub enum Registration {
    /// Stored as a suite hook with the given sequence number
    Stored { sequence: u64 },
    /// Not a suite hook; handed back for the per-example hook subsystem
    Delegated(HookDefinition),
}

/// Suite hook storage.
///
/// Each bucket keeps registration order. Execution order is derived by
/// [`HookRegistry::chain`] and never written back.
#[derive(Debug, Default)]
pub struct HookRegistry {
    before_prepend: Vec<HookDefinition>,
    before_normal: Vec<HookDefinition>,
    after_normal: Vec<HookDefinition>,
    after_append: Vec<HookDefinition>,
    next_sequence: u64,
}

impl HookRegistry {
    /// Create a new registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook of any scope.
    ///
    /// Suite hooks are stored; anything else is returned to the caller.
    pub fn register(
        &mut self,
        direction: HookDirection,
        scope: HookScope,
        position: HookPosition,
        body: HookBody,
    ) -> Registration {
        self.register_named(direction, scope, position, None, body)
    }

    /// Register a hook with a display name used in logs and captures
    pub fn register_named(
        &mut self,
        direction: HookDirection,
        scope: HookScope,
        position: HookPosition,
        name: Option<String>,
        body: HookBody,
    ) -> Registration {
        match scope {
            HookScope::Suite => Registration::Stored {
                sequence: self.register_suite(direction, position, name, body),
            },
            HookScope::ExampleGroupOrExample => {
                let sequence = self.next_sequence();
                Registration::Delegated(HookDefinition::new(
                    direction, scope, position, sequence, name, body,
                ))
            }
        }
    }

    /// Register a suite hook, returning its sequence number
    pub fn register_suite(
        &mut self,
        direction: HookDirection,
        position: HookPosition,
        name: Option<String>,
        body: HookBody,
    ) -> u64 {
        let sequence = self.next_sequence();
        let definition =
            HookDefinition::new(direction, HookScope::Suite, position, sequence, name, body);
        self.bucket_mut(direction, position).push(definition);
        sequence
    }

    /// Derive the execution order for one direction.
    ///
    /// Before: prepends newest-first, then normals oldest-first.
    /// After: normals newest-first, then appends oldest-first.
    pub fn chain(&self, direction: HookDirection) -> Vec<&HookDefinition> {
        let (newest_first, oldest_first) = match direction {
            HookDirection::Before => (&self.before_prepend, &self.before_normal),
            HookDirection::After => (&self.after_normal, &self.after_append),
        };
        newest_first
            .iter()
            .rev()
            .chain(oldest_first.iter())
            .collect()
    }

    pub fn before_chain(&self) -> Vec<&HookDefinition> {
        self.chain(HookDirection::Before)
    }

    pub fn after_chain(&self) -> Vec<&HookDefinition> {
        self.chain(HookDirection::After)
    }

    /// Check if any hooks are registered for a direction
    pub fn has_hooks(&self, direction: HookDirection) -> bool {
        self.hook_count(direction) > 0
    }

    /// Get hook count for a direction
    pub fn hook_count(&self, direction: HookDirection) -> usize {
        match direction {
            HookDirection::Before => self.before_prepend.len() + self.before_normal.len(),
            HookDirection::After => self.after_normal.len() + self.after_append.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.has_hooks(HookDirection::Before) && !self.has_hooks(HookDirection::After)
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    // `before` already appends and `after` already prepends, so those
    // positions share the normal bucket.
    fn bucket_mut(
        &mut self,
        direction: HookDirection,
        position: HookPosition,
    ) -> &mut Vec<HookDefinition> {
        match (direction, position) {
            (HookDirection::Before, HookPosition::Prepend) => &mut self.before_prepend,
            (HookDirection::Before, HookPosition::Normal | HookPosition::Append) => {
                &mut self.before_normal
            }
            (HookDirection::After, HookPosition::Prepend | HookPosition::Normal) => {
                &mut self.after_normal
            }
            (HookDirection::After, HookPosition::Append) => &mut self.after_append,
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
