// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Geometry: spatial queries behind box selection and edge hit
//! testing.
//!
//! This crate provides the pure geometry layer of the Trellis editor:
//! - Full-containment rectangle tests for box selection.
//! - Tight axis-aligned bounding boxes of cubic Bezier curves, so edges are
//!   box-selected by their rendered curve rather than just their endpoints.
//! - Construction of the cubic curve an edge renders as, from the two
//!   endpoint rectangles and the diagram orientation.
//! - A generous stroke-style hit test for clicking edges.
//!
//! Everything here is stateless and operates on [`kurbo`] primitives; the
//! node/edge model and the gesture logic live in other crates.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use trellis_geometry::{Orientation, contains_rect, cubic_bounding_box, edge_curve};
//!
//! let from = Rect::new(0.0, 0.0, 80.0, 40.0);
//! let to = Rect::new(200.0, 100.0, 280.0, 140.0);
//!
//! let curve = edge_curve(from, to, Orientation::LeftRight);
//! let bounds = cubic_bounding_box(curve);
//!
//! // The curve starts and ends at the node anchors, so its bounds span them.
//! assert!(contains_rect(Rect::new(-10.0, -10.0, 300.0, 150.0), bounds));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod anchors;
mod bezier;
mod containment;
mod edge;

pub use anchors::{center, center_bottom, center_left, center_right, center_top};
pub use bezier::cubic_bounding_box;
pub use containment::contains_rect;
pub use edge::{EDGE_HIT_HALF_WIDTH, Orientation, edge_curve, edge_hit};
