// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor points on a node's bounding box.
//!
//! Edge curves attach to these anchors depending on the diagram orientation.

use kurbo::{Point, Rect};

/// Center of the bounding box.
#[must_use]
pub fn center(rect: Rect) -> Point {
    rect.center()
}

/// Midpoint of the left side.
#[must_use]
pub fn center_left(rect: Rect) -> Point {
    Point::new(rect.x0, rect.center().y)
}

/// Midpoint of the right side.
#[must_use]
pub fn center_right(rect: Rect) -> Point {
    Point::new(rect.x1, rect.center().y)
}

/// Midpoint of the top side.
#[must_use]
pub fn center_top(rect: Rect) -> Point {
    Point::new(rect.center().x, rect.y0)
}

/// Midpoint of the bottom side.
#[must_use]
pub fn center_bottom(rect: Rect) -> Point {
    Point::new(rect.center().x, rect.y1)
}
