// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference [`ShownStore`] implementations.
//!
//! - [`MemoryStore`]: process-local map, for tests and hosts that persist elsewhere.
//! - [`JsonFileStore`]: a JSON object of `key → bool` on disk, durable across restarts.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StoreError;
use crate::gate::ShownStore;

/// Environment variable overriding [`JsonFileStore::default_path`].
pub const STORE_PATH_ENV: &str = "UNDERSTORY_SPOTLIGHT_STORE";

const APP_DIR: &str = "understory";
const FILENAME: &str = "spotlight_shown.json";

/// In-memory shown-state.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    shown: HashSet<String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShownStore for MemoryStore {
    fn is_shown(&self, key: &str) -> bool {
        self.shown.contains(key)
    }

    fn set_shown(&mut self, key: &str) {
        self.shown.insert(key.to_owned());
    }

    fn clear_shown(&mut self, key: &str) {
        self.shown.remove(key);
    }
}

/// Shown-state persisted as a JSON map in a single file.
///
/// The file is read on every query so that other writers are observed.
/// Writes go through a temporary sibling file and a rename.
///
/// [`ShownStore`] is infallible, so failures are logged: an unreadable file
/// reads as "not shown", and a failed write leaves the flag unset.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`. The file and its parent directories are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`Self::default_path`].
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// `$UNDERSTORY_SPOTLIGHT_STORE` if set, else `<data dir>/understory/spotlight_shown.json`.
    ///
    /// Falls back to the working directory when the platform has no data directory.
    pub fn default_path() -> PathBuf {
        if let Some(p) = std::env::var_os(STORE_PATH_ENV) {
            return PathBuf::from(p);
        }
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole map. A missing file is an empty map.
    pub fn load(&self) -> Result<BTreeMap<String, bool>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the whole map.
    pub fn save(&self, map: &BTreeMap<String, bool>) -> Result<(), StoreError> {
        let io = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io)?;
        }
        let json = serde_json::to_string_pretty(map).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io)?;
        fs::rename(&tmp, &self.path).map_err(io)
    }

    fn update(&mut self, key: &str, shown: bool) {
        let result = self.load().and_then(|mut map| {
            if shown {
                map.insert(key.to_owned(), true);
            } else {
                map.remove(key);
            }
            self.save(&map)
        });
        if let Err(e) = result {
            warn!(key, error = %e, "failed to persist shown-state");
        }
    }
}

impl ShownStore for JsonFileStore {
    fn is_shown(&self, key: &str) -> bool {
        match self.load() {
            Ok(map) => map.get(key).copied().unwrap_or(false),
            Err(e) => {
                warn!(key, error = %e, "failed to read shown-state, treating as not shown");
                false
            }
        }
    }

    fn set_shown(&mut self, key: &str) {
        self.update(key, true);
    }

    fn clear_shown(&mut self, key: &str) {
        self.update(key, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut s = MemoryStore::new();
        assert!(!s.is_shown("a"));
        s.set_shown("a");
        assert!(s.is_shown("a"));
        s.clear_shown("a");
        assert!(!s.is_shown("a"));
    }

    #[test]
    fn file_store_missing_file_reads_not_shown() {
        let dir = tempfile::tempdir().unwrap();
        let s = JsonFileStore::new(dir.path().join("nested/shown.json"));
        assert!(!s.is_shown("intro"));
        assert!(s.load().unwrap().is_empty());
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/shown.json");

        let mut first = JsonFileStore::new(&path);
        first.set_shown("intro");
        first.set_shown("settings");

        let mut second = JsonFileStore::new(&path);
        assert!(second.is_shown("intro"));
        assert!(second.is_shown("settings"));
        second.clear_shown("settings");

        assert!(first.is_shown("intro"));
        assert!(!first.is_shown("settings"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn file_store_malformed_file_reads_not_shown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shown.json");
        fs::write(&path, "not json").unwrap();

        let s = JsonFileStore::new(&path);
        assert!(!s.is_shown("intro"));
        assert!(matches!(s.load(), Err(StoreError::Json { .. })));
    }

    #[test]
    fn file_store_false_entries_read_not_shown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shown.json");
        fs::write(&path, r#"{"intro": false, "tour": true}"#).unwrap();

        let s = JsonFileStore::new(&path);
        assert!(!s.is_shown("intro"));
        assert!(s.is_shown("tour"));
    }
}
