// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-dispatch validation.
//!
//! Checks, in order: context present, context interactive, key present and
//! non-empty, then the first step's target, title and text. Each failure is
//! logged with its own message.
//!
//! Only the first step is inspected. Because the builder never clears the
//! per-step template, a field present on the first step is present on every
//! later one unless the caller replaces the template or clears a target via an
//! off-screen view; those later steps are dropped at dispatch with a warning.

use tracing::error;

use crate::error::ConfigError;
use crate::host::InteractiveHost;
use crate::sequence::Sequence;

/// Validate `sequence`, returning the interactive host it will be presented on.
pub fn validate<'a>(sequence: &Sequence<'a>) -> Result<&'a dyn InteractiveHost, ConfigError> {
    check(sequence).inspect_err(|e| error!(key = ?sequence.key(), "{e}"))
}

fn check<'a>(sequence: &Sequence<'a>) -> Result<&'a dyn InteractiveHost, ConfigError> {
    let context = sequence.context().ok_or(ConfigError::MissingContext)?;
    let host = context
        .interactive()
        .ok_or(ConfigError::NonInteractiveContext)?;
    match sequence.key() {
        Some(k) if !k.is_empty() => {}
        _ => return Err(ConfigError::MissingKey),
    }
    sequence.first_step()?;
    Ok(host)
}
