// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the focus resolver.
//!
//! 1. Inflation moves every edge by exactly the pixel margin
//! 2. Zero margin leaves the target untouched
//! 3. Zero-margin circles sit on the midpoint with a half-diagonal radius
//! 4. Circles are translation invariant
//! 5. Non-negative margins always enclose the target

use kurbo::{Point, Rect, Vec2};
use proptest::prelude::*;
use understory_focus_shape::{DisplayDensity, FocusShape, resolve_circle, resolve_inflated_rect};

fn coord() -> impl Strategy<Value = f64> {
    -4000.0f64..4000.0
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (coord(), coord(), 0.0f64..2000.0, 0.0f64..2000.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn density_strategy() -> impl Strategy<Value = DisplayDensity> {
    (0.75f64..4.0).prop_map(DisplayDensity::new)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn inflation_moves_each_edge_by_margin(
        r in rect_strategy(),
        margin in 0.0f64..64.0,
        density in density_strategy(),
    ) {
        let m = density.to_px(margin);
        let out = resolve_inflated_rect(r, margin, density);
        prop_assert!(close(r.x0 - out.x0, m), "left {} vs {}", r.x0 - out.x0, m);
        prop_assert!(close(r.y0 - out.y0, m), "top {} vs {}", r.y0 - out.y0, m);
        prop_assert!(close(out.x1 - r.x1, m), "right {} vs {}", out.x1 - r.x1, m);
        prop_assert!(close(out.y1 - r.y1, m), "bottom {} vs {}", out.y1 - r.y1, m);
    }

    #[test]
    fn zero_margin_inflation_is_identity(
        r in rect_strategy(),
        density in density_strategy(),
    ) {
        prop_assert_eq!(resolve_inflated_rect(r, 0.0, density), r);
    }

    #[test]
    fn zero_margin_circle_is_half_diagonal(
        r in rect_strategy(),
        density in density_strategy(),
    ) {
        let c = resolve_circle(r, 0.0, density);
        prop_assert!(close(c.center.x, (r.x0 + r.x1) / 2.0));
        prop_assert!(close(c.center.y, (r.y0 + r.y1) / 2.0));
        let diagonal = Vec2::new(r.width(), r.height()).hypot();
        prop_assert!(close(c.radius, diagonal / 2.0), "radius {} diagonal {}", c.radius, diagonal);
    }

    #[test]
    fn circle_radius_is_translation_invariant(
        w in 0.0f64..2000.0,
        h in 0.0f64..2000.0,
        dx in coord(),
        dy in coord(),
        margin in -16.0f64..64.0,
        density in density_strategy(),
    ) {
        let at_origin = resolve_circle(Rect::new(0.0, 0.0, w, h), margin, density);
        let moved = resolve_circle(Rect::new(dx, dy, dx + w, dy + h), margin, density);
        prop_assert!(close(at_origin.radius, moved.radius));
        prop_assert!(close(moved.center.x - at_origin.center.x, dx));
        prop_assert!(close(moved.center.y - at_origin.center.y, dy));
    }

    #[test]
    fn non_negative_margin_circle_covers_corners(
        r in rect_strategy(),
        margin in 0.0f64..64.0,
        density in density_strategy(),
    ) {
        let shape = FocusShape::Circle(resolve_circle(r, margin, density));
        // Allow for rounding on the boundary by nudging corners toward the center.
        let center = r.center();
        for corner in [
            Point::new(r.x0, r.y0),
            Point::new(r.x1, r.y0),
            Point::new(r.x0, r.y1),
            Point::new(r.x1, r.y1),
        ] {
            let nudged = corner.lerp(center, 1e-9);
            prop_assert!(shape.contains(nudged), "corner {:?} outside", corner);
        }
    }
}
