// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-step configuration and the immutable step record.
//!
//! ## Template and descriptor
//!
//! A [`StepTemplate`] is the mutable, per-step half of the builder's state.
//! [`StepDescriptor::from_template`] snapshots a template, resolves its focus
//! geometry, and produces the immutable record handed to the renderer.
//!
//! The builder never resets its template after a snapshot, so anything not
//! set for a later step carries over from the previous one.

use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use understory_focus_shape::{DisplayDensity, FocusKind, FocusShape, resolve};

use crate::error::ConfigError;
use crate::host::Capabilities;

/// A 32-bit ARGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0);

    /// Pack alpha, red, green and blue channels.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The alpha channel.
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// The same color with its alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((a as u32) << 24))
    }
}

bitflags::bitflags! {
    /// Which callout buttons a step shows.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ButtonFlags: u8 {
        /// Primary (close/continue) button.
        const BUTTON        = 0b0000_0001;
        /// Next/previous navigation buttons.
        const MOVE_BUTTONS  = 0b0000_0010;
        /// Cancel button.
        const CANCEL_BUTTON = 0b0000_0100;
    }
}

impl Default for ButtonFlags {
    fn default() -> Self {
        Self::BUTTON | Self::CANCEL_BUTTON
    }
}

bitflags::bitflags! {
    /// Where the description callout is anchored relative to the focus area.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Gravity: u8 {
        /// Left of the focus area.
        const LEFT              = 0b0000_0001;
        /// Right of the focus area.
        const RIGHT             = 0b0000_0010;
        /// Above the focus area.
        const TOP               = 0b0000_0100;
        /// Below the focus area.
        const BOTTOM            = 0b0000_1000;
        /// Centered horizontally.
        const CENTER_HORIZONTAL = 0b0001_0000;
        /// Centered vertically.
        const CENTER_VERTICAL   = 0b0010_0000;
        /// Centered on both axes.
        const CENTER = Self::CENTER_HORIZONTAL.bits() | Self::CENTER_VERTICAL.bits();
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::RIGHT
    }
}

/// How the description callout is positioned.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Anchored by gravity.
    Gravity(Gravity),
    /// Offset from the renderer's default position, in device pixels.
    Offset(Vec2),
}

/// Colors for one step. `None` leaves the renderer's default in place.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepPalette {
    /// Description title color.
    pub title: Option<Argb>,
    /// Description body color.
    pub text: Option<Argb>,
    /// Primary button label color.
    pub button_text: Option<Argb>,
    /// Primary button background color.
    pub button_background: Option<Argb>,
    /// Dimmed background color.
    pub background: Argb,
    /// Alpha applied to the dimmed background.
    pub background_alpha: u8,
    /// Fill of the focus cut-out.
    pub focus_area: Argb,
    /// Cancel button tint. Needs [`Capabilities::BUTTON_TINT`].
    pub cancel_button: Option<Argb>,
    /// Tint of the selected page indicator. Needs [`Capabilities::BUTTON_TINT`].
    pub move_selected: Option<Argb>,
    /// Tint of unselected page indicators. Needs [`Capabilities::BUTTON_TINT`].
    pub move_unselected: Option<Argb>,
}

impl Default for StepPalette {
    fn default() -> Self {
        Self {
            title: None,
            text: None,
            button_text: None,
            button_background: None,
            background: Argb::BLACK,
            background_alpha: 204,
            focus_area: Argb::TRANSPARENT,
            cancel_button: None,
            move_selected: None,
            move_unselected: None,
        }
    }
}

/// Mutable per-step configuration.
///
/// Every [`SequenceBuilder`](crate::builder::SequenceBuilder) setter other than
/// the cross-step ones writes into a template like this.
#[derive(Clone, Debug, PartialEq)]
pub struct StepTemplate {
    /// Region to highlight, in device pixels.
    pub target: Option<Rect>,
    /// Opaque image resource shown with the description.
    pub image: Option<u32>,
    /// Description title. Required.
    pub title: Option<String>,
    /// Description body. Required.
    pub text: Option<String>,
    /// Primary button label; `None` uses the renderer's default.
    pub button_text: Option<String>,
    /// Visible buttons.
    pub buttons: ButtonFlags,
    /// Colors.
    pub palette: StepPalette,
    /// Draw a radial gradient around the focus area.
    pub gradient_focus: bool,
    /// Cut the focus shape out of the background at all.
    pub focus_visible: bool,
    /// Gravity used when `use_gravity` is set.
    pub gravity: Gravity,
    /// Choose gravity placement over the delta offset.
    pub use_gravity: bool,
    /// Offset used when `use_gravity` is not set.
    pub delta: Vec2,
    /// Focus shape selector.
    pub kind: FocusKind,
    /// Padding around the target, in dp.
    pub margin_dp: f64,
}

impl Default for StepTemplate {
    fn default() -> Self {
        Self {
            target: None,
            image: None,
            title: None,
            text: None,
            button_text: None,
            buttons: ButtonFlags::default(),
            palette: StepPalette::default(),
            gradient_focus: false,
            focus_visible: true,
            gravity: Gravity::default(),
            use_gravity: false,
            delta: Vec2::ZERO,
            kind: FocusKind::default(),
            margin_dp: 0.0,
        }
    }
}

impl StepTemplate {
    /// Description placement implied by the gravity settings.
    pub fn placement(&self) -> Placement {
        if self.use_gravity {
            Placement::Gravity(self.gravity)
        } else {
            Placement::Offset(self.delta)
        }
    }
}

/// One finalized step: content, styling, and resolved focus geometry.
///
/// Created once by [`StepDescriptor::from_template`] and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepDescriptor {
    title: String,
    text: String,
    image: Option<u32>,
    button_text: Option<String>,
    buttons: ButtonFlags,
    palette: StepPalette,
    gradient_focus: bool,
    focus_visible: bool,
    placement: Placement,
    target: Rect,
    focus: FocusShape,
}

impl StepDescriptor {
    /// Snapshot `template`, converting its margin with `density`.
    ///
    /// Fails with the first missing required field, checked in the order
    /// target, title, text. An empty title or text counts as missing.
    pub fn from_template(
        template: &StepTemplate,
        density: DisplayDensity,
    ) -> Result<Self, ConfigError> {
        let target = template.target.ok_or(ConfigError::MissingTarget)?;
        let title = non_empty(template.title.as_deref()).ok_or(ConfigError::MissingTitle)?;
        let text = non_empty(template.text.as_deref()).ok_or(ConfigError::MissingText)?;
        Ok(Self {
            title,
            text,
            image: template.image,
            button_text: template.button_text.clone(),
            buttons: template.buttons,
            palette: template.palette,
            gradient_focus: template.gradient_focus,
            focus_visible: template.focus_visible,
            placement: template.placement(),
            target,
            focus: resolve(template.kind, target, template.margin_dp, density),
        })
    }

    /// Description title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Image resource, if any.
    pub fn image(&self) -> Option<u32> {
        self.image
    }

    /// Primary button label, if overridden.
    pub fn button_text(&self) -> Option<&str> {
        self.button_text.as_deref()
    }

    /// Visible buttons.
    pub fn buttons(&self) -> ButtonFlags {
        self.buttons
    }

    /// Colors.
    pub fn palette(&self) -> &StepPalette {
        &self.palette
    }

    /// Whether the focus area is drawn with a gradient.
    pub fn gradient_focus(&self) -> bool {
        self.gradient_focus
    }

    /// Whether the focus shape is cut out at all.
    pub fn focus_visible(&self) -> bool {
        self.focus_visible
    }

    /// Description placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Target region the focus was derived from.
    pub fn target(&self) -> Rect {
        self.target
    }

    /// Resolved focus shape.
    pub fn focus(&self) -> FocusShape {
        self.focus
    }

    /// Renderer features this step asks for.
    pub fn required_capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        if self.focus.kind() == FocusKind::RoundedRectangle {
            caps |= Capabilities::ROUNDED_RECT;
        }
        let p = &self.palette;
        if p.cancel_button.is_some() || p.move_selected.is_some() || p.move_unselected.is_some() {
            caps |= Capabilities::BUTTON_TINT;
        }
        caps
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn complete() -> StepTemplate {
        StepTemplate {
            target: Some(Rect::new(0.0, 0.0, 100.0, 40.0)),
            title: Some("Hi".into()),
            text: Some("Welcome".into()),
            ..Default::default()
        }
    }

    #[test]
    fn argb_channels() {
        let c = Argb::new(0x80, 0x11, 0x22, 0x33);
        assert_eq!(c, Argb(0x8011_2233));
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.with_alpha(0xFF), Argb(0xFF11_2233));
        assert_eq!(Argb::BLACK.alpha(), 0xFF);
    }

    #[test]
    fn defaults_match_documented_values() {
        let t = StepTemplate::default();
        assert_eq!(t.buttons, ButtonFlags::BUTTON | ButtonFlags::CANCEL_BUTTON);
        assert_eq!(t.palette.background, Argb::BLACK);
        assert_eq!(t.palette.background_alpha, 204);
        assert_eq!(t.palette.focus_area, Argb::TRANSPARENT);
        assert_eq!(t.gravity, Gravity::RIGHT);
        assert_eq!(t.kind, FocusKind::Circle);
        assert!(t.focus_visible);
        assert!(!t.gradient_focus);
    }

    #[test]
    fn missing_fields_reported_in_order() {
        let empty = StepTemplate::default();
        assert_eq!(
            StepDescriptor::from_template(&empty, DisplayDensity::MDPI),
            Err(ConfigError::MissingTarget)
        );

        let mut t = complete();
        t.title = None;
        t.text = None;
        assert_eq!(
            StepDescriptor::from_template(&t, DisplayDensity::MDPI),
            Err(ConfigError::MissingTitle)
        );

        t.title = Some("Hi".into());
        assert_eq!(
            StepDescriptor::from_template(&t, DisplayDensity::MDPI),
            Err(ConfigError::MissingText)
        );
    }

    #[test]
    fn empty_title_or_text_counts_as_missing() {
        let mut t = complete();
        t.title = Some(String::new());
        assert_eq!(
            StepDescriptor::from_template(&t, DisplayDensity::MDPI),
            Err(ConfigError::MissingTitle)
        );

        t.title = Some("Hi".into());
        t.text = Some(String::new());
        assert_eq!(
            StepDescriptor::from_template(&t, DisplayDensity::MDPI),
            Err(ConfigError::MissingText)
        );
    }

    #[test]
    fn descriptor_resolves_focus() {
        let mut t = complete();
        t.kind = FocusKind::Rectangle;
        t.margin_dp = 4.0;
        let d = StepDescriptor::from_template(&t, DisplayDensity::XHDPI).unwrap();
        assert_eq!(
            d.focus(),
            FocusShape::Rectangle(Rect::new(-8.0, -8.0, 108.0, 48.0))
        );
        assert_eq!(d.target(), Rect::new(0.0, 0.0, 100.0, 40.0));
        assert!(d.focus().contains(Point::new(50.0, 20.0)));
    }

    #[test]
    fn placement_follows_use_gravity() {
        let mut t = complete();
        t.delta = Vec2::new(12.0, -4.0);
        t.gravity = Gravity::BOTTOM | Gravity::CENTER_HORIZONTAL;
        assert_eq!(t.placement(), Placement::Offset(Vec2::new(12.0, -4.0)));
        t.use_gravity = true;
        assert_eq!(
            t.placement(),
            Placement::Gravity(Gravity::BOTTOM | Gravity::CENTER_HORIZONTAL)
        );
    }

    #[test]
    fn capabilities_follow_shape_and_tints() {
        let plain = StepDescriptor::from_template(&complete(), DisplayDensity::MDPI).unwrap();
        assert!(plain.required_capabilities().is_empty());

        let mut t = complete();
        t.kind = FocusKind::RoundedRectangle;
        t.palette.move_selected = Some(Argb::WHITE);
        let d = StepDescriptor::from_template(&t, DisplayDensity::MDPI).unwrap();
        assert_eq!(
            d.required_capabilities(),
            Capabilities::ROUNDED_RECT | Capabilities::BUTTON_TINT
        );
    }
}
