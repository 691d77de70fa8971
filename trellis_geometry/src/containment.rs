// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Returns `true` if `inner` lies entirely within `outer`.
///
/// This is the box-selection rule: an entity is selected only when its full
/// bounding box is contained; partial overlap does not count. Boundary
/// contact is allowed on all four sides.
#[must_use]
pub fn contains_rect(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.x1 <= outer.x1 && inner.y0 >= outer.y0 && inner.y1 <= outer.y1
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::contains_rect;

    #[test]
    fn full_containment_required() {
        let outer = Rect::new(-10.0, -10.0, 90.0, 50.0);
        assert!(contains_rect(outer, Rect::new(0.0, 0.0, 80.0, 40.0)));
        // Partial overlap is not containment.
        assert!(!contains_rect(outer, Rect::new(50.0, 0.0, 130.0, 40.0)));
        // Fully disjoint.
        assert!(!contains_rect(outer, Rect::new(100.0, 100.0, 180.0, 140.0)));
    }

    #[test]
    fn boundary_contact_counts_as_inside() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(contains_rect(outer, outer));
        assert!(contains_rect(outer, Rect::new(0.0, 0.0, 100.0, 50.0)));
    }
}
