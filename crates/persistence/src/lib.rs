// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Snapshot persistence for the Khatma reading tracker.
//!
//! The store's whole state is two independent JSON collections written
//! under fixed keys:
//!
//! - [`KHATMAS_KEY`] — the khatma collection, newest-first
//! - [`COMPLETION_LOG_KEY`] — the completion log
//!
//! Dates are encoded as ISO-8601 strings and revive through serde on load.
//!
//! Loading follows an explicit fallback contract: any read failure, parse
//! failure or unusable shape on either key yields [`LoadOutcome::Fallback`]
//! with the reason captured, never an error. The caller substitutes its
//! seed dataset and keeps going; a broken snapshot must not take the
//! application down.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use khatma_audit::CompletionRecord;
use khatma_domain::Khatma;
use tracing::debug;

mod backend;
mod error;

#[cfg(test)]
mod tests;

pub use backend::{FileStore, MemoryStore};
pub use error::PersistenceError;

/// Storage key for the khatma collection.
pub const KHATMAS_KEY: &str = "khatma-list-v1";

/// Storage key for the completion log.
pub const COMPLETION_LOG_KEY: &str = "khatma-completion-log-v1";

/// Internal enum for backend-specific storage.
///
/// This enum allows the persistence adapter to work with either the file
/// or the in-memory backend behind a single public API.
enum BackendStore {
    File(FileStore),
    Memory(MemoryStore),
}

/// The result of loading a snapshot.
///
/// `Fallback` is a first-class outcome, not an error: it tells the caller
/// to start from its seed dataset and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Both keys yielded a usable snapshot.
    Loaded {
        /// The khatma collection, in stored order.
        khatmas: Vec<Khatma>,
        /// The completion log, in stored order.
        records: Vec<CompletionRecord>,
    },
    /// The snapshot was absent, empty or unusable.
    Fallback {
        /// Why the snapshot was rejected.
        reason: String,
    },
}

/// Persistence adapter for the khatma collection and completion log.
///
/// Backend selection happens once at construction time and is transparent
/// to callers.
pub struct Persistence {
    store: BackendStore,
}

impl Persistence {
    /// Creates a persistence adapter over an in-process map.
    ///
    /// Nothing survives the process; intended for tests and ephemeral runs.
    #[must_use]
    pub fn new_in_memory() -> Self {
        Self {
            store: BackendStore::Memory(MemoryStore::new()),
        }
    }

    /// Creates a persistence adapter over a storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new_with_dir<P: AsRef<std::path::Path>>(dir: P) -> Result<Self, PersistenceError> {
        Ok(Self {
            store: BackendStore::File(FileStore::open(dir)?),
        })
    }

    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match &self.store {
            BackendStore::File(store) => store.read(key),
            BackendStore::Memory(store) => store.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        match &mut self.store {
            BackendStore::File(store) => store.write(key, value),
            BackendStore::Memory(store) => store.write(key, value),
        }
    }

    /// Loads the khatma collection and completion log.
    ///
    /// Degrades to [`LoadOutcome::Fallback`] when the khatma key is absent
    /// or empty (a fresh installation), or when either key fails to read or
    /// parse (a corrupt snapshot). A present khatma list with an absent log
    /// key loads with an empty log.
    #[must_use]
    pub fn load(&self) -> LoadOutcome {
        let raw_khatmas = match self.read(KHATMAS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                return LoadOutcome::Fallback {
                    reason: format!("no snapshot under key {KHATMAS_KEY}"),
                };
            }
            Err(err) => {
                return LoadOutcome::Fallback {
                    reason: format!("reading {KHATMAS_KEY} failed: {err}"),
                };
            }
        };

        let khatmas: Vec<Khatma> = match serde_json::from_str(&raw_khatmas) {
            Ok(khatmas) => khatmas,
            Err(err) => {
                return LoadOutcome::Fallback {
                    reason: format!("parsing {KHATMAS_KEY} failed: {err}"),
                };
            }
        };
        if khatmas.is_empty() {
            return LoadOutcome::Fallback {
                reason: format!("snapshot under key {KHATMAS_KEY} is empty"),
            };
        }

        let records: Vec<CompletionRecord> = match self.read(COMPLETION_LOG_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(err) => {
                    return LoadOutcome::Fallback {
                        reason: format!("parsing {COMPLETION_LOG_KEY} failed: {err}"),
                    };
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                return LoadOutcome::Fallback {
                    reason: format!("reading {COMPLETION_LOG_KEY} failed: {err}"),
                };
            }
        };

        debug!(
            khatmas = khatmas.len(),
            records = records.len(),
            "loaded snapshot"
        );
        LoadOutcome::Loaded { khatmas, records }
    }

    /// Writes both collections under their fixed keys.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    /// Callers treat a failed save as non-fatal: the in-memory state stays
    /// authoritative for the session.
    pub fn save(
        &mut self,
        khatmas: &[Khatma],
        records: &[CompletionRecord],
    ) -> Result<(), PersistenceError> {
        let encoded_khatmas = serde_json::to_string(khatmas)?;
        let encoded_records = serde_json::to_string(records)?;
        self.write(KHATMAS_KEY, &encoded_khatmas)?;
        self.write(COMPLETION_LOG_KEY, &encoded_records)?;
        Ok(())
    }
}
