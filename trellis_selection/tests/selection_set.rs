// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `trellis_selection` crate.
//!
//! These exercise the `SelectionSet` API with a focus on how contents and
//! the revision counter interact.

use trellis_selection::SelectionSet;

#[test]
fn empty_selection_basics() {
    let sel = SelectionSet::<u32>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.len(), 0);
    assert_eq!(sel.items(), &[]);
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_only_bumps_revision_once() {
    let mut sel = SelectionSet::new();
    sel.select_only(1);
    assert_eq!(sel.items(), &[1]);
    assert_eq!(sel.revision(), 1);

    // No-op: selecting the same singleton again should not change revision.
    sel.select_only(1);
    assert_eq!(sel.revision(), 1);

    sel.select_only(2);
    assert_eq!(sel.items(), &[2]);
    assert_eq!(sel.revision(), 2);
}

#[test]
fn clear_bumps_revision_only_on_change() {
    let mut sel = SelectionSet::<u32>::new();
    sel.clear();
    assert_eq!(sel.revision(), 0);

    sel.select_only(1);
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);
}

#[test]
fn replace_with_dedups_input() {
    let mut sel = SelectionSet::new();
    sel.replace_with([1, 2, 2, 3, 1]);
    assert_eq!(sel.items(), &[1, 2, 3]);
}

#[test]
fn replace_with_identical_contents_is_a_noop() {
    let mut sel = SelectionSet::new();
    sel.replace_with([1, 2, 3]);
    let rev = sel.revision();
    sel.replace_with([1, 2, 3]);
    assert_eq!(sel.revision(), rev);
}

#[test]
fn replace_with_empty_clears() {
    let mut sel = SelectionSet::new();
    sel.replace_with([1, 2]);
    sel.replace_with([]);
    assert!(sel.is_empty());
}

#[test]
fn remove_reports_whether_anything_happened() {
    let mut sel = SelectionSet::new();
    sel.replace_with([1, 2]);
    let rev = sel.revision();

    assert!(sel.remove(&1));
    assert_eq!(sel.items(), &[2]);
    assert_eq!(sel.revision(), rev + 1);

    assert!(!sel.remove(&99));
    assert_eq!(sel.revision(), rev + 1);
}

#[test]
fn retain_prunes_stale_keys() {
    let mut sel = SelectionSet::new();
    sel.replace_with(["a", "b", "c"]);
    let rev = sel.revision();

    sel.retain(|k| *k != "b");
    assert_eq!(sel.items(), &["a", "c"]);
    assert_eq!(sel.revision(), rev + 1);

    // Nothing to prune: revision untouched.
    sel.retain(|_| true);
    assert_eq!(sel.revision(), rev + 1);
}

#[test]
fn default_does_not_require_default_keys() {
    // Opaque id type with no `Default` of its own.
    #[derive(PartialEq)]
    struct Key(&'static str);

    let sel = SelectionSet::<Key>::default();
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 0);
}

#[test]
fn works_with_non_copy_keys() {
    let mut sel = SelectionSet::new();
    sel.add(String::from("node-1"));
    sel.add(String::from("node-2"));
    sel.toggle(String::from("node-1"));
    assert_eq!(sel.items(), &[String::from("node-2")]);
}
