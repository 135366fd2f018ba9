// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_focus_shape --heading-base-level=0

//! Understory Focus Shape: Kurbo-native focus geometry for spotlight overlays.
//!
//! A spotlight overlay dims the screen and cuts a "focus" hole around a target
//! region. This crate derives that hole from the target rectangle and a margin.
//!
//! - [`resolve_circle`]: the smallest circle enclosing the target, grown by the margin.
//! - [`resolve_inflated_rect`]: the target rectangle grown by the margin on every side.
//! - [`resolve`]: pick one of the above by [`FocusKind`] and wrap it in a [`FocusShape`].
//!
//! Targets are in device pixels. Margins are in density-independent units (dp)
//! and are converted with a [`DisplayDensity`] before use.
//!
//! ## Edge cases
//!
//! Nothing here validates its input. Zero-area and inverted targets, and
//! negative margins, go through the same formulas and yield zero radii,
//! inverted rectangles, or shrunk focus areas. Callers supply sane regions.
//!
//! ## Example
//!
//! ```rust
//! use understory_focus_shape::{DisplayDensity, FocusKind, FocusShape, resolve};
//! use kurbo::{Point, Rect};
//!
//! // A 100×40 button, 8 dp margin on a 420 dpi screen (21 px).
//! let target = Rect::new(0.0, 0.0, 100.0, 40.0);
//! let shape = resolve(FocusKind::Circle, target, 8.0, DisplayDensity::new(2.625));
//!
//! let FocusShape::Circle(circle) = shape else { unreachable!() };
//! assert_eq!(circle.center, Point::new(50.0, 20.0));
//! assert!((circle.radius - 74.85).abs() < 0.01);
//!
//! // The same target as an inflated rectangle.
//! let rect = resolve(FocusKind::Rectangle, target, 8.0, DisplayDensity::new(2.625));
//! assert_eq!(rect.bounding_box(), Rect::new(-21.0, -21.0, 121.0, 61.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod resolve;
pub mod types;

pub use resolve::{resolve, resolve_circle, resolve_inflated_rect};
pub use types::{DisplayDensity, FocusKind, FocusShape};
