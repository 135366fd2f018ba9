// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation dispatcher: validate, gate, hand off, mark shown.
//!
//! ## Flow
//!
//! 1) [`validate`](crate::validate::validate) the sequence. Failures are logged
//!    and returned as [`Outcome::Rejected`]; nothing is written or sent.
//! 2) Unless in develop mode, ask the [`ShownGate`]. An already-shown key ends
//!    the dispatch with [`Outcome::AlreadyShown`].
//! 3) Build a [`PresentationRequest`], send it through the [`RenderSink`], and
//!    mark the key shown right away. The renderer never reports back.

use tracing::{info, warn};

use crate::error::ConfigError;
use crate::gate::{ShownGate, ShownStore};
use crate::request::{PresentationRequest, RenderSink};
use crate::sequence::{Sequence, Staged};
use crate::validate::validate;

/// Result of a dispatch attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The request was handed to the renderer and the key marked shown.
    Dispatched,
    /// The key was already marked shown; nothing happened.
    AlreadyShown,
    /// Validation failed; nothing happened.
    Rejected(ConfigError),
}

/// Hands validated sequences to a renderer, at most once per key.
#[derive(Debug)]
pub struct Dispatcher<S, R> {
    gate: ShownGate<S>,
    sink: R,
}

impl<S: ShownStore, R: RenderSink> Dispatcher<S, R> {
    /// Create a dispatcher over a shown-state store and a renderer sink.
    pub fn new(store: S, sink: R) -> Self {
        Self {
            gate: ShownGate::new(store),
            sink,
        }
    }

    /// The show-once gate.
    pub fn gate(&self) -> &ShownGate<S> {
        &self.gate
    }

    /// Mutable access to the gate, e.g. to reset a key.
    pub fn gate_mut(&mut self) -> &mut ShownGate<S> {
        &mut self.gate
    }

    /// The renderer sink.
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Consume the dispatcher, returning its store and sink.
    pub fn into_parts(self) -> (S, R) {
        (self.gate.into_store(), self.sink)
    }

    /// Present `sequence` if it is valid and not yet shown.
    ///
    /// Never fails loudly: configuration errors are logged and reported as
    /// [`Outcome::Rejected`].
    pub fn dispatch(&mut self, sequence: Sequence<'_>) -> Outcome {
        let host = match validate(&sequence) {
            Ok(host) => host,
            Err(e) => return Outcome::Rejected(e),
        };
        // Validation guarantees a non-empty key.
        let key = sequence.key.unwrap_or_default();

        if !sequence.develop_mode && !self.gate.should_show(&key, false) {
            info!(key = %key, "already shown, skipping");
            return Outcome::AlreadyShown;
        }

        let total = sequence.steps.len();
        let steps: Vec<_> = sequence
            .steps
            .into_iter()
            .filter_map(|s| match s {
                Staged::Ready(step) => Some(step),
                Staged::Incomplete(_) => None,
            })
            .collect();
        if steps.len() < total {
            warn!(
                key = %key,
                dropped = total - steps.len(),
                "incomplete steps after the first were dropped"
            );
        }

        let request = PresentationRequest {
            key,
            steps,
            system_ui_visible: host.system_ui_visible(),
            capabilities: host.capabilities(),
        };
        let missing = request.required_capabilities() - request.capabilities;
        if !missing.is_empty() {
            warn!(key = %request.key, ?missing, "host lacks requested renderer features");
        }

        let key = request.key.clone();
        info!(key = %key, steps = request.steps.len(), "dispatching sequence");
        self.sink.send(request);
        self.gate.mark_shown(&key);
        Outcome::Dispatched
    }
}
