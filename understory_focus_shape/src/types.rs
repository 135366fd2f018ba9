// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for focus geometry: display density, shape selector, and resolved shapes.

use kurbo::{Circle, Point, Rect};

/// Device pixels per density-independent unit (dp).
///
/// Margins are authored in dp so they look the same on every screen; they are
/// converted to device pixels with the host's current density before any
/// geometry is resolved.
///
/// The baseline density is `1.0` (one pixel per dp). The value is not validated:
/// a zero or negative scale simply flows through the conversion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayDensity(f64);

impl DisplayDensity {
    /// Baseline density (160 dpi class).
    pub const MDPI: Self = Self(1.0);
    /// 240 dpi class.
    pub const HDPI: Self = Self(1.5);
    /// 320 dpi class.
    pub const XHDPI: Self = Self(2.0);
    /// 480 dpi class.
    pub const XXHDPI: Self = Self(3.0);
    /// 640 dpi class.
    pub const XXXHDPI: Self = Self(4.0);

    /// Create a density from a pixels-per-dp scale factor.
    pub const fn new(scale: f64) -> Self {
        Self(scale)
    }

    /// The pixels-per-dp scale factor.
    pub const fn scale(self) -> f64 {
        self.0
    }

    /// Convert a length in dp to device pixels.
    pub fn to_px(self, dp: f64) -> f64 {
        dp * self.0
    }

    /// Convert a length in device pixels to dp.
    ///
    /// Returns a non-finite value when the scale is zero.
    pub fn to_dp(self, px: f64) -> f64 {
        px / self.0
    }
}

impl Default for DisplayDensity {
    fn default() -> Self {
        Self::MDPI
    }
}

/// Which focus shape to derive for a step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FocusKind {
    /// Smallest circle enclosing the target, grown by the margin.
    #[default]
    Circle,
    /// Target rectangle inflated by the margin.
    Rectangle,
    /// Target rectangle inflated by the margin; the renderer rounds the corners.
    RoundedRectangle,
}

/// Resolved focus geometry in device pixels.
///
/// Exactly one shape is carried per step. The rounded variant carries the same
/// inflated rectangle as [`FocusShape::Rectangle`]; corner radii are a
/// rendering concern.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FocusShape {
    /// Circle around the target.
    Circle(Circle),
    /// Inflated target rectangle.
    Rectangle(Rect),
    /// Inflated target rectangle, drawn with rounded corners.
    RoundedRectangle(Rect),
}

impl FocusShape {
    /// The selector that produces this shape.
    pub const fn kind(&self) -> FocusKind {
        match self {
            Self::Circle(_) => FocusKind::Circle,
            Self::Rectangle(_) => FocusKind::Rectangle,
            Self::RoundedRectangle(_) => FocusKind::RoundedRectangle,
        }
    }

    /// Axis-aligned bounds of the shape.
    ///
    /// For circles this is the bounding square; a negative radius yields an
    /// inverted rectangle, matching how the shape itself was derived.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle(c) => Rect::new(
                c.center.x - c.radius,
                c.center.y - c.radius,
                c.center.x + c.radius,
                c.center.y + c.radius,
            ),
            Self::Rectangle(r) | Self::RoundedRectangle(r) => *r,
        }
    }

    /// Whether `pt` lies inside the shape, boundary included.
    ///
    /// Inverted rectangles and negative radii contain nothing. The rounded
    /// variant is tested against its full rectangle.
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Circle(c) => c.radius >= 0.0 && (pt - c.center).hypot2() <= c.radius * c.radius,
            Self::Rectangle(r) | Self::RoundedRectangle(r) => {
                r.x0 <= pt.x && pt.x <= r.x1 && r.y0 <= pt.y && pt.y <= r.y1
            }
        }
    }
}
