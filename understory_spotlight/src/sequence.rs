// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A built, non-empty sequence of steps plus its cross-step settings.

use crate::dispatch::{Dispatcher, Outcome};
use crate::error::ConfigError;
use crate::gate::ShownStore;
use crate::host::HostContext;
use crate::request::RenderSink;
use crate::step::StepDescriptor;

/// A step as finalized by [`SequenceBuilder::build`](crate::builder::SequenceBuilder::build).
///
/// A template missing a required field cannot become a descriptor; it is kept
/// with the reason so validation can report it at dispatch.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Staged {
    Ready(StepDescriptor),
    Incomplete(ConfigError),
}

/// Ordered steps ready for dispatch.
///
/// Produced by [`SequenceBuilder::build`](crate::builder::SequenceBuilder::build),
/// consumed by [`Dispatcher::dispatch`]. Never empty.
pub struct Sequence<'a> {
    pub(crate) context: Option<&'a dyn HostContext>,
    pub(crate) key: Option<String>,
    pub(crate) develop_mode: bool,
    pub(crate) steps: Vec<Staged>,
}

impl core::fmt::Debug for Sequence<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sequence")
            .field("key", &self.key)
            .field("develop_mode", &self.develop_mode)
            .field("has_context", &self.context.is_some())
            .field("steps", &self.steps.len())
            .finish_non_exhaustive()
    }
}

impl<'a> Sequence<'a> {
    /// Sequence key, if one was set.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Whether the show-once check is bypassed.
    pub fn develop_mode(&self) -> bool {
        self.develop_mode
    }

    /// Host context, if one was set.
    pub fn context(&self) -> Option<&'a dyn HostContext> {
        self.context
    }

    /// Number of staged steps, complete or not.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The first step, or why it could not be finalized.
    pub fn first_step(&self) -> Result<&StepDescriptor, ConfigError> {
        match self.steps.first() {
            Some(Staged::Ready(d)) => Ok(d),
            Some(Staged::Incomplete(e)) => Err(*e),
            // `build` refuses empty sequences.
            None => Err(ConfigError::MissingTarget),
        }
    }

    /// Finalized steps in display order.
    pub fn steps(&self) -> impl Iterator<Item = &StepDescriptor> + '_ {
        self.steps.iter().filter_map(|s| match s {
            Staged::Ready(d) => Some(d),
            Staged::Incomplete(_) => None,
        })
    }

    /// Dispatch through `dispatcher`.
    pub fn show<S: ShownStore, R: RenderSink>(self, dispatcher: &mut Dispatcher<S, R>) -> Outcome {
        dispatcher.dispatch(self)
    }
}
