// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis View: viewport primitives for an infinite diagram canvas.
//!
//! This crate provides the headless camera model of the Trellis editor. It
//! focuses on:
//! - Viewport state (screen-space pan offset + uniform zoom).
//! - Coordinate conversion between world and screen space.
//! - Anchor-preserving wheel and pinch zoom.
//! - Magnetic grid snapping.
//!
//! It does **not** own any scene graph or input routing. Callers are expected
//! to:
//! - Maintain their own node/edge model.
//! - Use [`Viewport`] to derive transforms and visible-region bounds.
//! - Wire pointer/wheel events into pan/zoom operations at a higher layer
//!   (for example, a gesture state machine).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use trellis_view::Viewport;
//!
//! let mut view = Viewport::new();
//!
//! // Zoom in around a cursor position; the world point under the cursor
//! // stays put on screen.
//! let cursor = Point::new(400.0, 300.0);
//! view.wheel_zoom(cursor, -120.0, 0.001);
//!
//! // Convert a screen-space point into world space (for hit testing, etc.).
//! let world_pt = view.screen_to_world(cursor);
//! let back = view.world_to_screen(world_pt);
//! assert!((back.x - cursor.x).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis-aligned with a **uniform** zoom factor, clamped to a
//!   configurable range. The pan offset is unconstrained; the world is
//!   unbounded.
//! - Panning operates in screen space via a captured anchor so the same world
//!   point tracks the pointer for the whole gesture, with no drift.
//! - Pinch zoom is tracked by [`PinchTracker`], which owns only the
//!   inter-touch distance memory; touch bookkeeping lives with the caller.
//!
//! This crate is `no_std`.

#![no_std]

mod grid;
mod pinch;
mod viewport;

pub use grid::{GRID_SIZE, SNAP_THRESHOLD, magnetic_snap, snap_to_grid};
pub use pinch::PinchTracker;
pub use viewport::{
    DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, Viewport, ViewportPatch, WHEEL_SENSITIVITY,
};
