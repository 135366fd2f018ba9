// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver: map a target rectangle and a dp margin to focus geometry.
//!
//! All functions are pure and total. Degenerate (zero-area) or inverted targets
//! are not rejected; they flow through the same formulas and may produce a zero
//! radius or an inverted rectangle. Negative margins shrink the focus area.

use kurbo::{Circle, Point, Rect, Vec2};

use crate::types::{DisplayDensity, FocusKind, FocusShape};

/// Smallest circle enclosing `target`, grown by `margin_dp`.
///
/// The center is the rectangle's midpoint and the radius is its half-diagonal
/// plus the margin converted to device pixels. No rounding is applied.
pub fn resolve_circle(target: Rect, margin_dp: f64, density: DisplayDensity) -> Circle {
    let center = Point::new(
        (target.x0 + target.x1) / 2.0,
        (target.y0 + target.y1) / 2.0,
    );
    let half = Vec2::new(
        (target.x1 - target.x0) / 2.0,
        (target.y1 - target.y0) / 2.0,
    );
    Circle::new(center, half.hypot() + density.to_px(margin_dp))
}

/// `target` expanded by `margin_dp` (converted to device pixels) on all four sides.
///
/// Edges are moved independently, so an inverted input stays inverted.
pub fn resolve_inflated_rect(target: Rect, margin_dp: f64, density: DisplayDensity) -> Rect {
    let m = density.to_px(margin_dp);
    Rect::new(target.x0 - m, target.y0 - m, target.x1 + m, target.y1 + m)
}

/// Resolve the focus shape selected by `kind`.
pub fn resolve(
    kind: FocusKind,
    target: Rect,
    margin_dp: f64,
    density: DisplayDensity,
) -> FocusShape {
    match kind {
        FocusKind::Circle => FocusShape::Circle(resolve_circle(target, margin_dp, density)),
        FocusKind::Rectangle => {
            FocusShape::Rectangle(resolve_inflated_rect(target, margin_dp, density))
        }
        FocusKind::RoundedRectangle => {
            FocusShape::RoundedRectangle(resolve_inflated_rect(target, margin_dp, density))
        }
    }
}
