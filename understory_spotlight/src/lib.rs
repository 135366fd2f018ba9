// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spotlight --heading-base-level=0

//! Understory Spotlight: step sequences for first-run onboarding overlays.
//!
//! ## Overview
//!
//! A spotlight tour dims the screen, cuts a focus shape around one target at a
//! time, and shows a callout next to it. This crate assembles and gates such
//! tours. It does not draw anything.
//!
//! - [`SequenceBuilder`]: fluent per-step configuration; [`add`](SequenceBuilder::add)
//!   snapshots a step, [`build`](SequenceBuilder::build) finishes the [`Sequence`].
//! - [`StepDescriptor`]: the immutable record for one step, with its focus shape
//!   resolved by [`understory_focus_shape`].
//! - [`ShownGate`]: show-once decision over a [`ShownStore`].
//! - [`Dispatcher`]: validates, gates, and hands a [`PresentationRequest`] to a
//!   [`RenderSink`].
//!
//! ## Workflow
//!
//! 1) Build: configure cross-step state (key, context, develop mode), then
//!    per-step state, calling `add()` after each step. Per-step settings carry
//!    over to later steps until changed.
//! 2) Dispatch: the dispatcher checks the context, the key, and the first step.
//!    Problems are logged and the tour is silently skipped.
//! 3) Gate: unless in develop mode, a key that was already launched is skipped.
//! 4) Hand-off: the request is sent one-way to the renderer and the key is
//!    marked shown immediately, whether or not the user finishes the tour.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use understory_focus_shape::{DisplayDensity, FocusShape};
//! use understory_spotlight::{
//!     Dispatcher, MemoryStore, Outcome, PresentationRequest, SequenceBuilder, StaticHost,
//! };
//!
//! let host = StaticHost { density: DisplayDensity::new(2.625), ..Default::default() };
//! let mut dispatcher = Dispatcher::new(MemoryStore::new(), Vec::<PresentationRequest>::new());
//!
//! let tour = || {
//!     SequenceBuilder::new()
//!         .context(&host)
//!         .key("onboarding")
//!         .target(Rect::new(0.0, 0.0, 100.0, 40.0))
//!         .margin(8.0)
//!         .title("Hi")
//!         .text("Welcome")
//!         .add()
//!         .build()
//!         .expect("one step was added")
//! };
//!
//! assert_eq!(dispatcher.dispatch(tour()), Outcome::Dispatched);
//! // Shown once per key.
//! assert_eq!(dispatcher.dispatch(tour()), Outcome::AlreadyShown);
//!
//! let FocusShape::Circle(circle) = dispatcher.sink()[0].steps[0].focus() else {
//!     unreachable!()
//! };
//! assert!((circle.radius - 74.85).abs() < 0.01);
//! ```
//!
//! ## Threading
//!
//! Everything runs synchronously on the caller's thread. The only boundary is
//! the [`RenderSink`], which may forward to another thread (for example over an
//! `mpsc` channel) but never replies.

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod host;
pub mod request;
pub mod sequence;
pub mod step;
pub mod store;
pub mod validate;

pub use builder::SequenceBuilder;
pub use dispatch::{Dispatcher, Outcome};
pub use error::{BuildError, ConfigError, StoreError};
pub use gate::{ShownGate, ShownStore};
pub use host::{Capabilities, HostContext, InteractiveHost, StaticHost, VisibleBounds};
pub use request::{PresentationRequest, RenderSink};
pub use sequence::Sequence;
pub use step::{Argb, ButtonFlags, Gravity, Placement, StepDescriptor, StepPalette, StepTemplate};
pub use store::{JsonFileStore, MemoryStore};
