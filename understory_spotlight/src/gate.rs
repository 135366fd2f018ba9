// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Show-once gate over a persisted per-key flag.
//!
//! ## Semantics
//!
//! The flag answers "has this sequence been launched", not "has the user
//! finished it". [`ShownGate::mark_shown`] runs right after the hand-off to the
//! renderer, so a launch that never renders still counts.
//!
//! The gate holds no copy of the flag; every query goes to the store.

use tracing::debug;

/// Boolean key-value persistence for the "already shown" flag.
///
/// Implementations own durability and atomicity. Unknown keys read as not shown.
pub trait ShownStore {
    /// Whether `key` has been marked shown.
    fn is_shown(&self, key: &str) -> bool;

    /// Mark `key` as shown.
    fn set_shown(&mut self, key: &str);

    /// Forget the flag for `key`.
    fn clear_shown(&mut self, key: &str);
}

impl<S: ShownStore + ?Sized> ShownStore for &mut S {
    fn is_shown(&self, key: &str) -> bool {
        (**self).is_shown(key)
    }

    fn set_shown(&mut self, key: &str) {
        (**self).set_shown(key);
    }

    fn clear_shown(&mut self, key: &str) {
        (**self).clear_shown(key);
    }
}

/// Decides whether a sequence should be presented and records that it was.
#[derive(Debug, Default)]
pub struct ShownGate<S> {
    store: S,
}

impl<S: ShownStore> ShownGate<S> {
    /// Create a gate reading and writing through `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the sequence under `key` should be shown.
    ///
    /// Always `true` in develop mode; otherwise `true` until [`Self::mark_shown`]
    /// has been called for `key`.
    pub fn should_show(&self, key: &str, develop_mode: bool) -> bool {
        if develop_mode {
            debug!(key, "develop mode bypasses shown-state");
            return true;
        }
        let shown = self.store.is_shown(key);
        debug!(key, shown, "shown-state queried");
        !shown
    }

    /// Record that the sequence under `key` was launched.
    pub fn mark_shown(&mut self, key: &str) {
        self.store.set_shown(key);
        debug!(key, "marked shown");
    }

    /// Forget that the sequence under `key` was launched.
    pub fn reset(&mut self, key: &str) {
        self.store.clear_shown(key);
        debug!(key, "shown-state reset");
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the gate, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }
}
