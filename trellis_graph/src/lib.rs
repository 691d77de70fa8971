// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Graph: the node/edge model of the diagram editor.
//!
//! This crate owns the data the rest of the editor operates on:
//! - [`Node`]: a positioned, sized rectangle with a stable string-backed id.
//! - [`Edge`]: a directed connection identified by its ordered endpoint pair.
//! - [`Diagram`]: the container, with lookup and the validated command
//!   boundary (add/replace/patch operations).
//!
//! Lookup is a linear scan over a flat `Vec`. At the sizes the editor
//! targets (tens of thousands of nodes, queried once per gesture step) this
//! is the intended design; there is no spatial tree to keep in sync.
//!
//! Edges reference nodes by id and are allowed to dangle: deleting a node
//! out from under an edge leaves the edge in place, and every geometry-aware
//! consumer resolves endpoints through
//! [`Diagram::edge_endpoints`] and skips edges that come back `None`.
//! Self-loops and duplicate `(from, to)` pairs, on the other hand, are
//! rejected when an edge is added through the command boundary.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod diagram;
mod types;

pub use diagram::Diagram;
pub use types::{
    DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH, Edge, EdgeKey, EdgePatch, EdgeRejected,
    MIN_NODE_SIZE, Node, NodeId, NodePatch, NodeRejected,
};
