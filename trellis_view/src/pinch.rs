// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::Viewport;

/// Incremental pinch-zoom tracker.
///
/// The tracker remembers the distance between the two touch points from the
/// previous update. Each new update scales the viewport zoom by the ratio of
/// the current distance to the remembered one, anchored at the touch
/// midpoint, then stores the current distance.
///
/// Callers must [`reset`](PinchTracker::reset) the tracker whenever fewer
/// than two touches are active; otherwise the first update of the next pinch
/// would compare against a stale distance and the view would jump.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchTracker {
    last_distance: Option<f64>,
}

impl PinchTracker {
    /// Creates an inactive tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_distance: None,
        }
    }

    /// Returns `true` once a reference distance has been captured.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_distance.is_some()
    }

    /// Clears the remembered distance.
    pub fn reset(&mut self) {
        self.last_distance = None;
    }

    /// Feeds the current positions of the two active touches.
    ///
    /// The first update after construction or a reset only captures the
    /// reference distance; subsequent updates zoom `viewport` about the touch
    /// midpoint. Coincident touches are ignored.
    pub fn update(&mut self, a: Point, b: Point, viewport: &mut Viewport) {
        let distance = (b - a).hypot();
        if distance <= 0.0 {
            return;
        }
        let midpoint = a.midpoint(b);
        if let Some(last) = self.last_distance
            && last > 0.0
        {
            let scale = distance / last;
            viewport.zoom_about(midpoint, viewport.zoom() * scale);
        }
        self.last_distance = Some(distance);
    }
}
