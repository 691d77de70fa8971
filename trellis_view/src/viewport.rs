// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 0.3;
/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;
/// Default wheel-delta to zoom-factor sensitivity.
pub const WHEEL_SENSITIVITY: f64 = 0.001;

/// Pan+zoom camera over the unbounded diagram plane.
///
/// `Viewport` stores a screen-space translation `(x, y)` and a uniform zoom
/// factor. A world point `w` renders at `w * zoom + (x, y)` on screen. It can
/// be used to:
/// - Convert points between world and screen coordinates.
/// - Zoom around a chosen screen anchor (wheel cursor or pinch midpoint).
/// - Pan via a captured anchor so the grabbed world point tracks the pointer.
///
/// The zoom factor is always within the configured limits; the translation is
/// unconstrained because the world is infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    x: f64,
    y: f64,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport at the origin with zoom `1.0` and the default
    /// zoom limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Returns the horizontal screen-space translation.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the vertical screen-space translation.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the current translation as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor, clamping it into the configured zoom range.
    ///
    /// The translation is left untouched; use [`Viewport::zoom_about`] to
    /// zoom while keeping a screen point fixed.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        Point::new((pt.x - self.x) / self.zoom, (pt.y - self.y) / self.zoom)
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        Point::new(pt.x * self.zoom + self.x, pt.y * self.zoom + self.y)
    }

    /// Returns the world-space rectangle visible through a screen region of
    /// the given size anchored at the screen origin.
    #[must_use]
    pub fn visible_world_rect(&self, view_size: Size) -> Rect {
        let top_left = self.screen_to_world(Point::ZERO);
        let bottom_right = self.screen_to_world(Point::new(view_size.width, view_size.height));
        Rect::from_points(top_left, bottom_right)
    }

    /// Zooms to `new_zoom` (clamped) while keeping the world point under the
    /// screen-space `anchor` fixed.
    ///
    /// The translation is recomputed so that
    /// `screen_to_world(anchor)` is identical before and after the call.
    pub fn zoom_about(&mut self, anchor: Point, new_zoom: f64) {
        let world = self.screen_to_world(anchor);
        self.zoom = new_zoom.clamp(self.min_zoom, self.max_zoom);
        self.x = anchor.x - world.x * self.zoom;
        self.y = anchor.y - world.y * self.zoom;
    }

    /// Applies a wheel event: scales the zoom by `1 - delta_y * sensitivity`,
    /// anchored at the cursor position.
    pub fn wheel_zoom(&mut self, cursor: Point, delta_y: f64, sensitivity: f64) {
        let factor = 1.0 - delta_y * sensitivity;
        if factor <= 0.0 {
            return;
        }
        self.zoom_about(cursor, self.zoom * factor);
    }

    /// Captures a pan anchor for the given pointer position.
    ///
    /// The anchor is `pointer - offset`; feeding later pointer positions into
    /// [`Viewport::pan_to`] with the same anchor keeps the grabbed world
    /// point exactly under the pointer for the whole gesture.
    #[must_use]
    pub fn pan_anchor(&self, pointer: Point) -> Vec2 {
        pointer.to_vec2() - self.offset()
    }

    /// Moves the translation so the anchored world point is under `pointer`.
    pub fn pan_to(&mut self, pointer: Point, anchor: Vec2) {
        self.x = pointer.x - anchor.x;
        self.y = pointer.y - anchor.y;
    }

    /// Merges a partial patch over the current viewport.
    ///
    /// Absent fields keep their current value; a patched zoom is clamped into
    /// the configured range.
    pub fn apply_patch(&mut self, patch: ViewportPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(zoom) = patch.zoom {
            self.set_zoom(zoom);
        }
    }
}

/// Partial viewport update merged over the current state.
///
/// This mirrors the "replace viewport" command accepted from surrounding UI:
/// any subset of the translation and zoom can be supplied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportPatch {
    /// New horizontal translation, if any.
    pub x: Option<f64>,
    /// New vertical translation, if any.
    pub y: Option<f64>,
    /// New zoom factor, if any. Clamped on application.
    pub zoom: Option<f64>,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{Viewport, ViewportPatch};

    #[test]
    fn screen_world_roundtrip() {
        let mut vp = Viewport::new();
        vp.apply_patch(ViewportPatch {
            x: Some(42.5),
            y: Some(-17.0),
            zoom: Some(1.7),
        });

        for &(sx, sy) in &[(0.0, 0.0), (800.0, 600.0), (-50.0, 1234.5), (3.25, -0.75)] {
            let screen = Point::new(sx, sy);
            let world = vp.screen_to_world(screen);
            let back = vp.world_to_screen(world);
            assert!((back.x - screen.x).abs() < 1e-9);
            assert!((back.y - screen.y).abs() < 1e-9);
        }
    }

    #[test]
    fn wheel_zoom_keeps_cursor_anchor_fixed() {
        let mut vp = Viewport::new();
        vp.apply_patch(ViewportPatch {
            x: Some(10.0),
            y: Some(20.0),
            zoom: Some(1.2),
        });

        let cursor = Point::new(400.0, 300.0);
        let before = vp.screen_to_world(cursor);
        vp.wheel_zoom(cursor, -250.0, 0.001);
        let after = vp.screen_to_world(cursor);

        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
        assert!(vp.zoom() > 1.2, "negative delta should zoom in");
    }

    #[test]
    fn zoom_stays_clamped_under_arbitrary_wheel_sequences() {
        let mut vp = Viewport::new();
        let cursor = Point::new(100.0, 100.0);

        let deltas = [
            -500.0, -500.0, -500.0, -500.0, 900.0, 900.0, 900.0, 900.0, 900.0, -120.0, 45.0,
        ];
        for &dy in &deltas {
            vp.wheel_zoom(cursor, dy, 0.001);
            assert!(
                (0.3..=3.0).contains(&vp.zoom()),
                "zoom escaped limits: {}",
                vp.zoom()
            );
        }
    }

    #[test]
    fn degenerate_wheel_factor_is_ignored() {
        let mut vp = Viewport::new();
        // delta large enough to produce a non-positive scale factor
        vp.wheel_zoom(Point::new(0.0, 0.0), 2000.0, 0.001);
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn zoom_limits_normalize_reversed_range() {
        let mut vp = Viewport::new();
        vp.set_zoom_limits(5.0, 0.5);
        vp.set_zoom(10.0);
        assert_eq!(vp.zoom(), 5.0);
        vp.set_zoom(0.01);
        assert_eq!(vp.zoom(), 0.5);
    }

    #[test]
    fn pan_anchor_tracks_without_drift() {
        let mut vp = Viewport::new();
        vp.apply_patch(ViewportPatch {
            x: Some(7.0),
            y: Some(-3.0),
            zoom: None,
        });

        let grab = Point::new(120.0, 80.0);
        let grabbed_world = vp.screen_to_world(grab);
        let anchor = vp.pan_anchor(grab);

        // Many intermediate moves; only the latest position matters.
        for &(px, py) in &[(130.0, 90.0), (10.0, 400.0), (-55.0, 12.0), (300.0, 300.0)] {
            let pointer = Point::new(px, py);
            vp.pan_to(pointer, anchor);
            let now = vp.screen_to_world(pointer);
            assert!((now.x - grabbed_world.x).abs() < 1e-9);
            assert!((now.y - grabbed_world.y).abs() < 1e-9);
        }
    }

    #[test]
    fn visible_world_rect_matches_corners() {
        let mut vp = Viewport::new();
        vp.apply_patch(ViewportPatch {
            x: Some(100.0),
            y: Some(50.0),
            zoom: Some(2.0),
        });

        let rect = vp.visible_world_rect(Size::new(800.0, 600.0));
        assert!((rect.x0 - (-50.0)).abs() < 1e-9);
        assert!((rect.y0 - (-25.0)).abs() < 1e-9);
        assert!((rect.x1 - 350.0).abs() < 1e-9);
        assert!((rect.y1 - 275.0).abs() < 1e-9);
    }

    #[test]
    fn patch_merges_partially() {
        let mut vp = Viewport::new();
        vp.apply_patch(ViewportPatch {
            x: Some(5.0),
            y: None,
            zoom: Some(99.0),
        });
        assert_eq!(vp.x(), 5.0);
        assert_eq!(vp.y(), 0.0);
        assert_eq!(vp.zoom(), 3.0, "patched zoom is clamped");
    }
}
