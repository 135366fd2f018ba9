// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side collaborators: the context a sequence is shown from, and target bounds.
//!
//! The core never talks to a windowing system directly. A toolkit integration
//! implements these traits on its own window/activity/view types.

use kurbo::Rect;
use understory_focus_shape::DisplayDensity;

bitflags::bitflags! {
    /// Optional renderer features the host platform supports.
    ///
    /// The core emits whatever shape and colors were requested; this set is
    /// carried to the renderer so it can degrade gracefully (for example, draw
    /// square corners when [`Capabilities::ROUNDED_RECT`] is missing).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct Capabilities: u8 {
        /// Rounded-rectangle focus cut-outs.
        const ROUNDED_RECT = 0b0000_0001;
        /// Per-button tint overrides (cancel and move buttons).
        const BUTTON_TINT  = 0b0000_0010;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::empty()
    }
}

/// The display surface a sequence is presented on.
pub trait InteractiveHost {
    /// Current pixels-per-dp of the display.
    fn density(&self) -> DisplayDensity;

    /// Whether the host's system UI (status and navigation bars) is fully visible.
    fn system_ui_visible(&self) -> bool;

    /// Renderer features available on this host.
    ///
    /// Defaults to none; a host has to claim each feature it supports.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }
}

/// Any context a builder can be handed.
///
/// Only contexts backed by an interactive display can present a sequence;
/// everything else is rejected at dispatch.
pub trait HostContext {
    /// The interactive display behind this context, if any.
    fn interactive(&self) -> Option<&dyn InteractiveHost>;
}

/// A UI element that can report where it is on screen.
pub trait VisibleBounds {
    /// Global visible rectangle in device pixels, or `None` when the element is
    /// not on screen.
    fn global_visible_rect(&self) -> Option<Rect>;
}

/// A fixed interactive host, useful for headless hosts and tests.
///
/// The default stands in for a fully featured renderer: baseline density,
/// visible system UI, and every [`Capabilities`] flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticHost {
    /// Display density.
    pub density: DisplayDensity,
    /// System UI visibility reported to the renderer.
    pub system_ui_visible: bool,
    /// Renderer features.
    pub capabilities: Capabilities,
}

impl Default for StaticHost {
    fn default() -> Self {
        Self {
            density: DisplayDensity::default(),
            system_ui_visible: true,
            capabilities: Capabilities::all(),
        }
    }
}

impl InteractiveHost for StaticHost {
    fn density(&self) -> DisplayDensity {
        self.density
    }

    fn system_ui_visible(&self) -> bool {
        self.system_ui_visible
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

impl HostContext for StaticHost {
    fn interactive(&self) -> Option<&dyn InteractiveHost> {
        Some(self)
    }
}

impl VisibleBounds for Rect {
    fn global_visible_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}
