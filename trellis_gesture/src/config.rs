// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_geometry::EDGE_HIT_HALF_WIDTH;
use trellis_view::{GRID_SIZE, SNAP_THRESHOLD, WHEEL_SENSITIVITY};

/// Screen-space distance a pressed pointer must travel before a press on a
/// node becomes a drag (or a press on an edge becomes a box selection).
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Screen-space distance a single touch must travel before it becomes a pan.
pub const TOUCH_PAN_DISTANCE: f64 = 10.0;

/// How long a touch may stay down and still count as a tap, in milliseconds.
pub const TAP_TIME_MS: u64 = 250;

/// Drift tolerance for a long-held touch: past [`TAP_TIME_MS`], moving more
/// than this far turns the touch into a pan.
pub const TOUCH_DRIFT_TOLERANCE: f64 = 2.0;

/// Box selections with a screen-space area below this count as clicks on
/// empty canvas, not as (degenerate) box selections.
pub const TAP_AREA: f64 = 25.0;

/// Side length of the square resize grip in a selected node's bottom-right
/// corner, in world units.
pub const RESIZE_HANDLE_SIZE: f64 = 10.0;

/// Tunable thresholds and sizes for gesture recognition.
///
/// Defaults reproduce the stock editor feel; hosts with unusual input
/// devices or densities can adjust individual fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Press-to-drag promotion distance, screen units.
    pub drag_threshold: f64,
    /// Touch press-to-pan promotion distance, screen units.
    pub touch_pan_distance: f64,
    /// Maximum tap duration for a touch, milliseconds.
    pub tap_time_ms: u64,
    /// Post-tap-window drift tolerance for touches, screen units.
    pub touch_drift_tolerance: f64,
    /// Area under which a box selection is treated as a click, screen units
    /// squared.
    pub tap_area: f64,
    /// Resize grip side length, world units.
    pub resize_handle_size: f64,
    /// Half-width of the invisible edge hit stroke, world units.
    pub edge_hit_half_width: f64,
    /// Grid cell size used when snapping dragged nodes, world units.
    pub grid_size: f64,
    /// Magnetic snap capture distance, world units.
    pub snap_threshold: f64,
    /// Wheel-delta to zoom-factor sensitivity.
    pub wheel_sensitivity: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            touch_pan_distance: TOUCH_PAN_DISTANCE,
            tap_time_ms: TAP_TIME_MS,
            touch_drift_tolerance: TOUCH_DRIFT_TOLERANCE,
            tap_area: TAP_AREA,
            resize_handle_size: RESIZE_HANDLE_SIZE,
            edge_hit_half_width: EDGE_HIT_HALF_WIDTH,
            grid_size: GRID_SIZE,
            snap_threshold: SNAP_THRESHOLD,
            wheel_sensitivity: WHEEL_SENSITIVITY,
        }
    }
}
