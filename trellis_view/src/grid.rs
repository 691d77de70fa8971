// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid snapping helpers.
//!
//! Snapping comes in two flavors: [`snap_to_grid`] always pulls a coordinate
//! onto the nearest grid line, while [`magnetic_snap`] only does so when the
//! coordinate is already within a threshold of a grid line. The magnetic
//! variant is what drag and resize gestures use, so the grid attracts nearby
//! geometry without forcing everything onto it.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Default grid spacing in world units.
pub const GRID_SIZE: f64 = 10.0;

/// Default magnetic snap threshold in world units.
pub const SNAP_THRESHOLD: f64 = 8.0;

/// Rounds `v` to the nearest multiple of `grid`.
///
/// A non-positive `grid` disables snapping and returns `v` unchanged. The
/// function is total and idempotent.
#[must_use]
pub fn snap_to_grid(v: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return v;
    }
    (v / grid).round() * grid
}

/// Snaps `v` onto the grid only when it is within `threshold` of a grid line.
///
/// Values further than the threshold from any grid line are returned
/// unchanged, producing a "magnetic" rather than forced grid.
#[must_use]
pub fn magnetic_snap(v: f64, grid: f64, threshold: f64) -> f64 {
    let snapped = snap_to_grid(v, grid);
    if (snapped - v).abs() < threshold {
        snapped
    } else {
        v
    }
}
