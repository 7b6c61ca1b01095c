// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::hooks::test_helpers::{noop, push, sequence, snapshot};
use proptest::prelude::*;
use rstest::rstest;

fn run_all(chain: Vec<&HookDefinition>) {
    for hook in chain {
        hook.invoke().unwrap();
    }
}

fn suite(
    registry: &mut HookRegistry,
    direction: HookDirection,
    position: HookPosition,
    body: HookBody,
) {
    registry.register(direction, HookScope::Suite, position, body);
}

#[test]
fn test_registry_new() {
    let registry = HookRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.has_hooks(HookDirection::Before));
    assert!(registry.before_chain().is_empty());
    assert!(registry.after_chain().is_empty());
}

#[test]
fn test_sequence_numbers_increase() {
    let mut registry = HookRegistry::new();
    let first = registry.register_suite(HookDirection::Before, HookPosition::Normal, None, noop());
    let second = registry.register_suite(HookDirection::After, HookPosition::Append, None, noop());
    let third = match registry.register(
        HookDirection::Before,
        HookScope::Suite,
        HookPosition::Prepend,
        noop(),
    ) {
        Registration::Stored { sequence } => sequence,
        Registration::Delegated(_) => panic!("suite hook was delegated"),
    };

    assert!(first < second && second < third);
    assert_eq!(registry.hook_count(HookDirection::Before), 2);
    assert_eq!(registry.hook_count(HookDirection::After), 1);
}

#[test]
fn test_non_suite_hooks_are_delegated() {
    let mut registry = HookRegistry::new();
    let registration = registry.register_named(
        HookDirection::Before,
        HookScope::ExampleGroupOrExample,
        HookPosition::Normal,
        Some("per-example".to_string()),
        noop(),
    );

    match registration {
        Registration::Delegated(definition) => {
            assert_eq!(definition.scope(), HookScope::ExampleGroupOrExample);
            assert_eq!(definition.name(), Some("per-example"));
        }
        Registration::Stored { .. } => panic!("example hook was stored"),
    }
    assert!(registry.is_empty());
}

#[test]
fn test_before_chain_prepend_then_normal() {
    let seq = sequence();
    let mut registry = HookRegistry::new();
    suite(&mut registry, HookDirection::Before, HookPosition::Normal, push(&seq, "b1"));
    suite(&mut registry, HookDirection::Before, HookPosition::Normal, push(&seq, "b2"));
    suite(&mut registry, HookDirection::Before, HookPosition::Prepend, push(&seq, "b3"));

    run_all(registry.before_chain());
    assert_eq!(snapshot(&seq), vec!["b3", "b1", "b2"]);
}

#[test]
fn test_after_chain_normal_reversed_then_append() {
    let seq = sequence();
    let mut registry = HookRegistry::new();
    suite(&mut registry, HookDirection::After, HookPosition::Normal, push(&seq, "a1"));
    suite(&mut registry, HookDirection::After, HookPosition::Normal, push(&seq, "a2"));
    suite(&mut registry, HookDirection::After, HookPosition::Append, push(&seq, "a3"));

    run_all(registry.after_chain());
    assert_eq!(snapshot(&seq), vec!["a2", "a1", "a3"]);
}

#[test]
fn test_multiple_prepends_newest_first() {
    let seq = sequence();
    let mut registry = HookRegistry::new();
    suite(&mut registry, HookDirection::Before, HookPosition::Prepend, push(&seq, "p1"));
    suite(&mut registry, HookDirection::Before, HookPosition::Normal, push(&seq, "n1"));
    suite(&mut registry, HookDirection::Before, HookPosition::Prepend, push(&seq, "p2"));

    run_all(registry.before_chain());
    assert_eq!(snapshot(&seq), vec!["p2", "p1", "n1"]);
}

#[test]
fn test_multiple_appends_oldest_first() {
    let seq = sequence();
    let mut registry = HookRegistry::new();
    suite(&mut registry, HookDirection::After, HookPosition::Append, push(&seq, "x1"));
    suite(&mut registry, HookDirection::After, HookPosition::Normal, push(&seq, "n1"));
    suite(&mut registry, HookDirection::After, HookPosition::Append, push(&seq, "x2"));

    run_all(registry.after_chain());
    assert_eq!(snapshot(&seq), vec!["n1", "x1", "x2"]);
}

#[rstest]
#[case::append_before_is_plain_before(
    HookDirection::Before,
    HookPosition::Append,
    vec!["first", "second"]
)]
#[case::prepend_after_is_plain_after(
    HookDirection::After,
    HookPosition::Prepend,
    vec!["second", "first"]
)]
fn test_folded_positions(
    #[case] direction: HookDirection,
    #[case] position: HookPosition,
    #[case] expected: Vec<&str>,
) {
    let seq = sequence();
    let mut registry = HookRegistry::new();
    suite(&mut registry, direction, HookPosition::Normal, push(&seq, "first"));
    suite(&mut registry, direction, position, push(&seq, "second"));

    run_all(registry.chain(direction));
    assert_eq!(snapshot(&seq), expected);
}

#[test]
fn test_chain_derivation_is_idempotent() {
    let mut registry = HookRegistry::new();
    for _ in 0..3 {
        suite(&mut registry, HookDirection::Before, HookPosition::Prepend, noop());
        suite(&mut registry, HookDirection::Before, HookPosition::Normal, noop());
    }

    let first: Vec<u64> = registry.before_chain().iter().map(|h| h.sequence()).collect();
    let second: Vec<u64> = registry.before_chain().iter().map(|h| h.sequence()).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![4, 2, 0, 1, 3, 5]);
}

#[test]
fn test_chain_contains_only_its_direction() {
    let mut registry = HookRegistry::new();
    suite(&mut registry, HookDirection::Before, HookPosition::Normal, noop());
    suite(&mut registry, HookDirection::After, HookPosition::Append, noop());

    assert!(registry
        .before_chain()
        .iter()
        .all(|h| h.direction() == HookDirection::Before));
    assert!(registry
        .after_chain()
        .iter()
        .all(|h| h.direction() == HookDirection::After));
}

fn position_strategy() -> impl Strategy<Value = HookPosition> {
    prop_oneof![
        Just(HookPosition::Prepend),
        Just(HookPosition::Normal),
        Just(HookPosition::Append),
    ]
}

proptest! {
    #[test]
    fn single_prepend_always_runs_first(normal_count in 0usize..8, prepend_at in 0usize..9) {
        let mut registry = HookRegistry::new();
        let prepend_at = prepend_at.min(normal_count);
        let mut normals = Vec::new();
        let mut prepend_seq = None;

        for i in 0..=normal_count {
            if i == prepend_at {
                prepend_seq = Some(registry.register_suite(
                    HookDirection::Before, HookPosition::Prepend, None, noop()));
            }
            if i < normal_count {
                normals.push(registry.register_suite(
                    HookDirection::Before, HookPosition::Normal, None, noop()));
            }
        }

        let order: Vec<u64> = registry.before_chain().iter().map(|h| h.sequence()).collect();
        prop_assert_eq!(order[0], prepend_seq.unwrap());
        prop_assert_eq!(&order[1..], &normals[..]);
    }

    #[test]
    fn chains_partition_storage(positions in proptest::collection::vec(
        (proptest::bool::ANY, position_strategy()), 0..20)
    ) {
        let mut registry = HookRegistry::new();
        for (is_before, position) in &positions {
            let direction = if *is_before { HookDirection::Before } else { HookDirection::After };
            registry.register_suite(direction, *position, None, noop());
        }

        let before = registry.before_chain().len();
        let after = registry.after_chain().len();
        prop_assert_eq!(before + after, positions.len());
        prop_assert_eq!(before, positions.iter().filter(|(b, _)| *b).count());
    }

    #[test]
    fn append_after_hooks_always_run_last(
        kinds in proptest::collection::vec(proptest::bool::ANY, 1..16)
    ) {
        let mut registry = HookRegistry::new();
        for is_append in &kinds {
            let position = if *is_append { HookPosition::Append } else { HookPosition::Normal };
            registry.register_suite(HookDirection::After, position, None, noop());
        }

        let positions: Vec<HookPosition> =
            registry.after_chain().iter().map(|h| h.position()).collect();
        let first_append = positions
            .iter()
            .position(|p| *p == HookPosition::Append)
            .unwrap_or(positions.len());
        prop_assert!(positions[first_append..].iter().all(|p| *p == HookPosition::Append));
    }
}
