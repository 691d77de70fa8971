// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Selection: the bookkeeping of what is currently selected.
//!
//! The editor tracks two independent selections, node ids and edge keys,
//! and both are instances of one small container, [`SelectionSet`]. The set
//! holds unique keys in a `Vec` with no hashing or ordering constraints on
//! the key type; insertion order is preserved but carries no semantics.
//!
//! The operations mirror the gestures that drive them:
//! - [`SelectionSet::select_only`]: plain click on an entity.
//! - [`SelectionSet::add`] / [`SelectionSet::remove`]: shift-click
//!   resolution.
//! - [`SelectionSet::toggle`]: shift-click on an edge.
//! - [`SelectionSet::replace_with`]: box selection (always replacing,
//!   never additive).
//! - [`SelectionSet::retain`]: pruning stale ids after the node or edge
//!   list is replaced from outside.
//!
//! A monotonically increasing revision counter bumps only when a mutation
//! changes the contents, so observers get a cheap "did anything actually
//! change?" marker without comparing sets.
//!
//! ## Example
//!
//! ```rust
//! use trellis_selection::SelectionSet;
//!
//! let mut selection = SelectionSet::<u32>::new();
//!
//! selection.select_only(10);
//! assert!(selection.contains(&10));
//!
//! // Box selection replaces the whole set.
//! selection.replace_with([1, 2, 3]);
//! assert_eq!(selection.len(), 3);
//!
//! // Entity 2 was deleted externally; prune it.
//! selection.retain(|key| *key != 2);
//! assert_eq!(selection.items(), &[1, 3]);
//! ```
//!
//! There is no history and no undo; every mutation is synchronous and
//! immediately visible.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// A set of unique selection keys with a change revision.
///
/// Keys only need `PartialEq`; uniqueness is enforced by scanning, which is
/// the right trade-off for the selection sizes a human produces by clicking
/// and box-dragging.
#[derive(Clone, Debug)]
pub struct SelectionSet<K> {
    items: Vec<K>,
    revision: u64,
}

// Manual impl: the derive would demand `K: Default`, which selection keys
// like string-backed ids do not provide.
impl<K> Default for SelectionSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SelectionSet<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected keys as a slice.
    #[must_use]
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// Returns the current revision counter.
    ///
    /// Bumped only when a mutation changes the contents; no-op calls leave
    /// it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump();
    }

    /// Keeps only the keys for which `keep` returns `true`.
    ///
    /// Used to prune stale ids after the underlying entity list changed.
    pub fn retain(&mut self, keep: impl FnMut(&K) -> bool) {
        let before = self.items.len();
        self.items.retain(keep);
        if self.items.len() != before {
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K> SelectionSet<K>
where
    K: PartialEq,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.items.iter().any(|k| k == key)
    }

    /// Replaces the selection with the single `key`.
    pub fn select_only(&mut self, key: K) {
        if self.items.len() == 1 && self.items.first() == Some(&key) {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.bump();
    }

    /// Adds `key` if not already selected. Returns `true` if it was added.
    pub fn add(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.items.push(key);
        self.bump();
        true
    }

    /// Removes `key` if selected. Returns `true` if it was removed.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(idx) = self.items.iter().position(|k| k == key) else {
            return false;
        };
        self.items.remove(idx);
        self.bump();
        true
    }

    /// Adds `key` if absent, removes it if present.
    pub fn toggle(&mut self, key: K) {
        if !self.remove(&key) {
            self.items.push(key);
            self.bump();
        }
    }

    /// Replaces the selection with a batch of keys, ignoring duplicates in
    /// the input. A replacement producing identical contents is a no-op.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut next: Vec<K> = Vec::new();
        for key in keys {
            if !next.iter().any(|existing| existing == &key) {
                next.push(key);
            }
        }
        if next == self.items {
            return;
        }
        self.items = next;
        self.bump();
    }
}
