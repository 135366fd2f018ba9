// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent builder for step sequences.
//!
//! ## State
//!
//! - Cross-step: key, host context, develop mode, density override. Set once
//!   and applied to the whole sequence, in any order relative to `add()`:
//!   margins are converted to pixels in [`SequenceBuilder::build`].
//! - Per-step: everything else, held in a [`StepTemplate`].
//!
//! ## Carry-over
//!
//! [`SequenceBuilder::add`] snapshots the current template into a step and
//! leaves the template as is. A setter not called before the next `add()`
//! keeps the value it had for the previous step. This is part of the
//! contract: a tour where every step shares colors and shape only sets them once.
//!
//! ```
//! use kurbo::Rect;
//! use understory_spotlight::SequenceBuilder;
//!
//! let seq = SequenceBuilder::new()
//!     .key("tour")
//!     .rectangle()
//!     .margin(4.0)
//!     .target(Rect::new(0.0, 0.0, 40.0, 40.0))
//!     .title("Search")
//!     .text("Find anything.")
//!     .add()
//!     // Same shape, margin and title; new target and text.
//!     .target(Rect::new(60.0, 0.0, 100.0, 40.0))
//!     .text("Your profile.")
//!     .add()
//!     .build()
//!     .unwrap();
//!
//! let titles: Vec<_> = seq.steps().map(|s| s.title()).collect();
//! assert_eq!(titles, ["Search", "Search"]);
//! ```

use kurbo::Rect;
use tracing::debug;
use understory_focus_shape::{DisplayDensity, FocusKind};

use crate::error::BuildError;
use crate::host::{HostContext, VisibleBounds};
use crate::sequence::{Sequence, Staged};
use crate::step::{Argb, ButtonFlags, Gravity, StepDescriptor, StepTemplate};

/// Accumulates steps for a [`Sequence`].
#[must_use = "builder setters return the updated builder"]
pub struct SequenceBuilder<'a> {
    context: Option<&'a dyn HostContext>,
    key: Option<String>,
    develop_mode: bool,
    density: Option<DisplayDensity>,
    template: StepTemplate,
    steps: Vec<StepTemplate>,
}

impl core::fmt::Debug for SequenceBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SequenceBuilder")
            .field("key", &self.key)
            .field("develop_mode", &self.develop_mode)
            .field("density", &self.density)
            .field("template", &self.template)
            .field("steps", &self.steps.len())
            .finish_non_exhaustive()
    }
}

impl Default for SequenceBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SequenceBuilder<'a> {
    /// Create a builder with default step settings and no steps.
    pub fn new() -> Self {
        Self {
            context: None,
            key: None,
            develop_mode: false,
            density: None,
            template: StepTemplate::default(),
            steps: Vec::new(),
        }
    }

    // Cross-step state.

    /// Host context the sequence is shown from.
    pub fn context(mut self, context: &'a dyn HostContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Key under which "already shown" is persisted.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Bypass the show-once check.
    pub fn developer_mode(mut self, enabled: bool) -> Self {
        self.develop_mode = enabled;
        self
    }

    /// Density used to convert margins, instead of the context's display density.
    pub fn density(mut self, density: DisplayDensity) -> Self {
        self.density = Some(density);
        self
    }

    // Per-step state.

    /// Replace the whole per-step template.
    pub fn template(mut self, template: StepTemplate) -> Self {
        self.template = template;
        self
    }

    /// The current per-step template.
    pub fn current_template(&self) -> &StepTemplate {
        &self.template
    }

    /// Region to highlight, in device pixels.
    pub fn target(mut self, target: Rect) -> Self {
        self.template.target = Some(target);
        self
    }

    /// Highlight a UI element at its current on-screen position.
    ///
    /// An element that is not on screen clears the target.
    pub fn view(mut self, view: &dyn VisibleBounds) -> Self {
        self.template.target = view.global_visible_rect();
        self
    }

    /// Image resource shown with the description.
    pub fn image(mut self, image: u32) -> Self {
        self.template.image = Some(image);
        self
    }

    /// Description title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.template.title = Some(title.into());
        self
    }

    /// Description body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.template.text = Some(text.into());
        self
    }

    /// Primary button label.
    pub fn button_text(mut self, text: impl Into<String>) -> Self {
        self.template.button_text = Some(text.into());
        self
    }

    /// Show the primary button.
    pub fn button_visibility(mut self, visible: bool) -> Self {
        self.template.buttons.set(ButtonFlags::BUTTON, visible);
        self
    }

    /// Show next/previous buttons.
    pub fn move_buttons_visibility(mut self, visible: bool) -> Self {
        self.template.buttons.set(ButtonFlags::MOVE_BUTTONS, visible);
        self
    }

    /// Show the cancel button.
    pub fn cancel_button_visibility(mut self, visible: bool) -> Self {
        self.template.buttons.set(ButtonFlags::CANCEL_BUTTON, visible);
        self
    }

    /// Title color.
    pub fn title_color(mut self, color: Argb) -> Self {
        self.template.palette.title = Some(color);
        self
    }

    /// Body color.
    pub fn text_color(mut self, color: Argb) -> Self {
        self.template.palette.text = Some(color);
        self
    }

    /// Primary button label color.
    pub fn button_text_color(mut self, color: Argb) -> Self {
        self.template.palette.button_text = Some(color);
        self
    }

    /// Primary button background color.
    pub fn button_background_color(mut self, color: Argb) -> Self {
        self.template.palette.button_background = Some(color);
        self
    }

    /// Dimmed background color.
    pub fn background_color(mut self, color: Argb) -> Self {
        self.template.palette.background = color;
        self
    }

    /// Dimmed background alpha.
    pub fn background_alpha(mut self, alpha: u8) -> Self {
        self.template.palette.background_alpha = alpha;
        self
    }

    /// Fill of the focus cut-out.
    pub fn focus_area_color(mut self, color: Argb) -> Self {
        self.template.palette.focus_area = color;
        self
    }

    /// Cancel button tint. Rendered only with [`Capabilities::BUTTON_TINT`](crate::Capabilities::BUTTON_TINT).
    pub fn cancel_button_color(mut self, color: Argb) -> Self {
        self.template.palette.cancel_button = Some(color);
        self
    }

    /// Selected page indicator tint. Rendered only with [`Capabilities::BUTTON_TINT`](crate::Capabilities::BUTTON_TINT).
    pub fn selected_move_button_color(mut self, color: Argb) -> Self {
        self.template.palette.move_selected = Some(color);
        self
    }

    /// Unselected page indicator tint. Rendered only with [`Capabilities::BUTTON_TINT`](crate::Capabilities::BUTTON_TINT).
    pub fn unselected_move_button_color(mut self, color: Argb) -> Self {
        self.template.palette.move_unselected = Some(color);
        self
    }

    /// Draw a radial gradient around the focus area.
    pub fn gradient_focus(mut self, enabled: bool) -> Self {
        self.template.gradient_focus = enabled;
        self
    }

    /// Cut the focus shape out of the background.
    pub fn focus_visible(mut self, enabled: bool) -> Self {
        self.template.focus_visible = enabled;
        self
    }

    /// Gravity for the description; takes effect with [`Self::use_gravity`].
    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.template.gravity = gravity;
        self
    }

    /// Place the description by gravity instead of by offset.
    pub fn use_gravity(mut self, enabled: bool) -> Self {
        self.template.use_gravity = enabled;
        self
    }

    /// Horizontal description offset in device pixels.
    pub fn description_delta_x(mut self, dx: f64) -> Self {
        self.template.delta.x = dx;
        self
    }

    /// Vertical description offset in device pixels.
    pub fn description_delta_y(mut self, dy: f64) -> Self {
        self.template.delta.y = dy;
        self
    }

    /// Padding around the target in dp. May be negative.
    pub fn margin(mut self, margin_dp: f64) -> Self {
        self.template.margin_dp = margin_dp;
        self
    }

    /// Circle focus shape (the default).
    pub fn circle(mut self) -> Self {
        self.template.kind = FocusKind::Circle;
        self
    }

    /// Rectangle focus shape.
    pub fn rectangle(mut self) -> Self {
        self.template.kind = FocusKind::Rectangle;
        self
    }

    /// Rounded-rectangle focus shape. Rendered only with [`Capabilities::ROUNDED_RECT`](crate::Capabilities::ROUNDED_RECT).
    pub fn rounded_rectangle(mut self) -> Self {
        self.template.kind = FocusKind::RoundedRectangle;
        self
    }

    // Assembly.

    /// Density that [`Self::build`] converts margins with.
    ///
    /// The explicit override if set, else the context's display density, else the baseline.
    pub fn effective_density(&self) -> DisplayDensity {
        self.density
            .or_else(|| {
                self.context
                    .and_then(|c| c.interactive())
                    .map(|h| h.density())
            })
            .unwrap_or_default()
    }

    /// Snapshot the current template as the next step.
    pub fn add(mut self) -> Self {
        self.steps.push(self.template.clone());
        self
    }

    /// Finish the sequence.
    ///
    /// Every staged step is finalized here with [`Self::effective_density`],
    /// so a context or density set after an `add()` still applies to it. A step
    /// missing its target, title, or text is kept as incomplete; the sequence
    /// is then rejected at dispatch if it is the first one.
    ///
    /// Fails with [`BuildError::NoSteps`] if [`Self::add`] was never called.
    pub fn build(self) -> Result<Sequence<'a>, BuildError> {
        if self.steps.is_empty() {
            return Err(BuildError::NoSteps);
        }
        let density = self.effective_density();
        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, template)| match StepDescriptor::from_template(template, density) {
                Ok(step) => Staged::Ready(step),
                Err(reason) => {
                    debug!(index, %reason, "staged incomplete step");
                    Staged::Incomplete(reason)
                }
            })
            .collect();
        Ok(Sequence {
            context: self.context,
            key: self.key,
            develop_mode: self.develop_mode,
            steps,
        })
    }
}
