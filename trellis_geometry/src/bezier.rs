// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tight bounding boxes of cubic Bezier curves.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{CubicBez, ParamCurve, Point, Rect};

/// Leading coefficients smaller than this are treated as zero and the
/// derivative is solved as a linear equation instead.
const QUAD_EPSILON: f64 = 1e-12;

/// Computes the tight axis-aligned bounding box of a cubic Bezier curve.
///
/// For each axis the derivative `dB/dt` is a quadratic in `t`; its roots in
/// the open interval `(0, 1)` are the interior extrema. The curve is
/// evaluated at those roots plus both endpoints, and the box is the min/max
/// over the resulting points per axis.
///
/// Degenerate cases are handled explicitly: a near-zero leading coefficient
/// falls back to the linear equation, and a negative discriminant means the
/// axis contributes no interior extremum.
#[must_use]
pub fn cubic_bounding_box(c: CubicBez) -> Rect {
    let mut bounds = Rect::from_points(c.p0, c.p3);

    let (tx, nx) = derivative_roots(c.p0.x, c.p1.x, c.p2.x, c.p3.x);
    for &t in &tx[..nx] {
        bounds = include(bounds, c.eval(t));
    }
    let (ty, ny) = derivative_roots(c.p0.y, c.p1.y, c.p2.y, c.p3.y);
    for &t in &ty[..ny] {
        bounds = include(bounds, c.eval(t));
    }
    bounds
}

fn include(rect: Rect, pt: Point) -> Rect {
    Rect::new(
        rect.x0.min(pt.x),
        rect.y0.min(pt.y),
        rect.x1.max(pt.x),
        rect.y1.max(pt.y),
    )
}

/// Roots of the per-axis derivative quadratic inside the open unit interval.
///
/// Returns up to two parameter values; `t = 0` and `t = 1` are excluded
/// because the endpoints are always evaluated anyway.
fn derivative_roots(p0: f64, p1: f64, p2: f64, p3: f64) -> ([f64; 2], usize) {
    // B'(t) = a*t^2 + b*t + c with the usual Bernstein-derivative expansion.
    let a = 3.0 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3);
    let b = 6.0 * (p0 - 2.0 * p1 + p2);
    let c = 3.0 * (p1 - p0);

    let mut roots = [0.0; 2];
    let mut n = 0;
    let mut push = |t: f64| {
        if t > 0.0 && t < 1.0 {
            roots[n] = t;
            n += 1;
        }
    };

    if a.abs() < QUAD_EPSILON {
        // Degenerate quadratic; solve b*t + c = 0 when possible.
        if b.abs() >= QUAD_EPSILON {
            push(-c / b);
        }
    } else {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 {
            let sqrt_d = discriminant.sqrt();
            push((-b + sqrt_d) / (2.0 * a));
            push((-b - sqrt_d) / (2.0 * a));
        }
    }
    (roots, n)
}

#[cfg(test)]
mod tests {
    use kurbo::{CubicBez, ParamCurveExtrema, Point, Rect};

    use super::cubic_bounding_box;

    fn assert_rect_close(a: Rect, b: Rect) {
        assert!((a.x0 - b.x0).abs() < 1e-9, "x0: {a:?} vs {b:?}");
        assert!((a.y0 - b.y0).abs() < 1e-9, "y0: {a:?} vs {b:?}");
        assert!((a.x1 - b.x1).abs() < 1e-9, "x1: {a:?} vs {b:?}");
        assert!((a.y1 - b.y1).abs() < 1e-9, "y1: {a:?} vs {b:?}");
    }

    #[test]
    fn arch_curve_has_interior_y_extremum() {
        let c = CubicBez::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(100.0, 0.0),
        );
        // y(t) = 300*t*(1-t), maximal at t = 0.5 with value 75.
        assert_rect_close(cubic_bounding_box(c), Rect::new(0.0, 0.0, 100.0, 75.0));
    }

    #[test]
    fn monotone_curve_is_bounded_by_endpoints() {
        let c = CubicBez::new(
            Point::new(0.0, 0.0),
            Point::new(25.0, 25.0),
            Point::new(75.0, 75.0),
            Point::new(100.0, 100.0),
        );
        assert_rect_close(cubic_bounding_box(c), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn degenerate_quadratic_falls_back_to_linear() {
        // Per-axis control values chosen so the quadratic coefficient of the
        // x-derivative vanishes (-p0 + 3p1 - 3p2 + p3 = 0) while the curve
        // still has an interior x extremum.
        let c = CubicBez::new(
            Point::new(0.0, 0.0),
            Point::new(-50.0, 30.0),
            Point::new(-50.0, 70.0),
            Point::new(0.0, 100.0),
        );
        let ours = cubic_bounding_box(c);
        let oracle = c.bounding_box();
        assert_rect_close(ours, oracle);
        assert!(ours.x0 < -30.0, "interior extremum must widen the box");
    }

    #[test]
    fn matches_kurbo_extrema_oracle() {
        let cases = [
            CubicBez::new(
                Point::new(10.0, 20.0),
                Point::new(210.0, -40.0),
                Point::new(-90.0, 160.0),
                Point::new(110.0, 120.0),
            ),
            CubicBez::new(
                Point::new(-3.5, 0.25),
                Point::new(12.0, 99.0),
                Point::new(85.5, -20.0),
                Point::new(40.0, 40.0),
            ),
            CubicBez::new(
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
            ),
            CubicBez::new(
                Point::new(120.0, 60.0),
                Point::new(170.0, 60.0),
                Point::new(150.0, 60.0),
                Point::new(200.0, 60.0),
            ),
        ];
        for c in cases {
            assert_rect_close(cubic_bounding_box(c), c.bounding_box());
        }
    }
}
