// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for sequence construction, validation, and shown-state storage.

use std::path::PathBuf;

/// A missing or unusable piece of configuration.
///
/// These never escape [`Dispatcher::dispatch`](crate::dispatch::Dispatcher::dispatch):
/// they are logged and the dispatch is abandoned with no side effects.
/// They are also what an incomplete step is staged with when
/// [`SequenceBuilder::build`](crate::builder::SequenceBuilder::build) cannot finalize it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No host context was supplied.
    #[error("context can not be missing")]
    MissingContext,
    /// The host context has no interactive display behind it.
    #[error("context must be an interactive display context")]
    NonInteractiveContext,
    /// The sequence key is absent or empty.
    #[error("key can not be missing or empty")]
    MissingKey,
    /// The step has no target region.
    #[error("target region can not be missing")]
    MissingTarget,
    /// The step has no description title, or an empty one.
    #[error("description title can not be missing")]
    MissingTitle,
    /// The step has no description text, or an empty one.
    #[error("description text can not be missing")]
    MissingText,
}

/// Failure to assemble a sequence.
///
/// Unlike [`ConfigError`], this is a programming error on the caller's side and
/// is returned from [`SequenceBuilder::build`](crate::builder::SequenceBuilder::build).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// `build()` was called before any `add()`.
    #[error("add() must be invoked before build()")]
    NoSteps,
}

/// I/O or encoding failure inside [`JsonFileStore`](crate::store::JsonFileStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("shown-state file {}: {source}", path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The backing file is not a JSON map of booleans.
    #[error("shown-state file {} is malformed: {source}", path.display())]
    Json {
        /// File that was being decoded.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}
