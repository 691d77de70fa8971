// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge curve construction and click hit testing.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{CubicBez, ParamCurveNearest, Point, Rect, Vec2};

use crate::anchors::{center_bottom, center_left, center_right, center_top};

/// Half of the invisible hit stroke laid along an edge, in world units.
///
/// Matches a 6-unit-wide transparent stroke over the rendered 2-unit curve:
/// clicks within this distance of the centerline count as hits. This is a
/// deliberately generous approximation, not exact analytic geometry.
pub const EDGE_HIT_HALF_WIDTH: f64 = 3.0;

/// Accuracy passed to the nearest-point solver; plenty for hit testing.
const NEAREST_ACCURACY: f64 = 1e-4;

/// Direction in which the diagram flows, controlling edge anchors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Edges leave the source at center-right and enter the target at
    /// center-left.
    #[default]
    LeftRight,
    /// Edges leave the source at center-bottom and enter the target at
    /// center-top.
    TopBottom,
}

/// Builds the cubic curve an edge renders as, given the endpoint node
/// bounding boxes.
///
/// The control points extend half the anchor distance along the orientation
/// axis, which keeps the curve leaving and entering the nodes perpendicular
/// to their sides.
#[must_use]
pub fn edge_curve(from: Rect, to: Rect, orientation: Orientation) -> CubicBez {
    match orientation {
        Orientation::LeftRight => {
            let p0 = center_right(from);
            let p3 = center_left(to);
            let lead = Vec2::new((p3.x - p0.x) / 2.0, 0.0);
            CubicBez::new(p0, p0 + lead, p3 - lead, p3)
        }
        Orientation::TopBottom => {
            let p0 = center_bottom(from);
            let p3 = center_top(to);
            let lead = Vec2::new(0.0, (p3.y - p0.y) / 2.0);
            CubicBez::new(p0, p0 + lead, p3 - lead, p3)
        }
    }
}

/// Tests a point against the wide invisible stroke along an edge curve.
///
/// Returns the distance to the curve when the point is within `half_width`
/// of it, so callers testing several edges can keep the closest hit. `None`
/// means a miss.
#[must_use]
pub fn edge_hit(pt: Point, curve: &CubicBez, half_width: f64) -> Option<f64> {
    let nearest = curve.nearest(pt, NEAREST_ACCURACY);
    let distance = nearest.distance_sq.sqrt();
    (distance <= half_width).then_some(distance)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{EDGE_HIT_HALF_WIDTH, Orientation, edge_curve, edge_hit};

    const FROM: Rect = Rect::new(0.0, 0.0, 80.0, 40.0);
    const TO: Rect = Rect::new(200.0, 0.0, 280.0, 40.0);

    #[test]
    fn left_right_curve_spans_side_anchors() {
        let c = edge_curve(FROM, TO, Orientation::LeftRight);
        assert_eq!(c.p0, Point::new(80.0, 20.0));
        assert_eq!(c.p3, Point::new(200.0, 20.0));
        // Control points stay on the anchor height for horizontal flow.
        assert_eq!(c.p1, Point::new(140.0, 20.0));
        assert_eq!(c.p2, Point::new(140.0, 20.0));
    }

    #[test]
    fn top_bottom_curve_spans_vertical_anchors() {
        let from = Rect::new(0.0, 0.0, 80.0, 40.0);
        let to = Rect::new(0.0, 200.0, 80.0, 240.0);
        let c = edge_curve(from, to, Orientation::TopBottom);
        assert_eq!(c.p0, Point::new(40.0, 40.0));
        assert_eq!(c.p3, Point::new(40.0, 200.0));
        assert_eq!(c.p1, Point::new(40.0, 120.0));
        assert_eq!(c.p2, Point::new(40.0, 120.0));
    }

    #[test]
    fn hit_within_stroke_miss_outside() {
        let c = edge_curve(FROM, TO, Orientation::LeftRight);

        // This curve degenerates to the horizontal segment y = 20.
        let on = Point::new(140.0, 20.0);
        let near = Point::new(140.0, 22.0);
        let outside = Point::new(140.0, 30.0);

        assert!(edge_hit(on, &c, EDGE_HIT_HALF_WIDTH).is_some());
        let d = edge_hit(near, &c, EDGE_HIT_HALF_WIDTH).unwrap();
        assert!((d - 2.0).abs() < 1e-2);
        assert!(edge_hit(outside, &c, EDGE_HIT_HALF_WIDTH).is_none());
    }
}
