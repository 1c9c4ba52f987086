// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Completion records and the append-only completion log.
//!
//! A completion record is written exactly once, when a khatma first reaches
//! 100%. Records are never updated or deleted afterwards; the log is an
//! audit trail. Record identifiers derive deterministically from the
//! completion event so re-derivation across reloads can never produce a
//! duplicate entry.

use khatma_domain::Khatma;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An immutable log entry for one khatma completion event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    /// Deterministic identifier derived from the completion event.
    pub id: String,
    /// The khatma this record belongs to.
    pub khatma_id: String,
    /// Campaign title at completion time.
    pub title: String,
    /// Name of the person who opened the campaign.
    pub created_by: String,
    /// Name of the deceased the reward was dedicated to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deceased_name: Option<String>,
    /// When the khatma first reached 100%.
    #[serde(with = "time::serde::iso8601")]
    pub completed_at: OffsetDateTime,
    /// Distinct reader and reserver names collected at completion time.
    pub participants: Vec<String>,
}

impl CompletionRecord {
    /// Derives the record identifier for a completion event.
    ///
    /// The identifier is `"{khatma_id}-{unix_millis}"`. Deriving it from
    /// the khatma id and its completion instant means recomputing the log
    /// for the same event always lands on the same identifier.
    #[must_use]
    pub fn derive_id(khatma_id: &str, completed_at: OffsetDateTime) -> String {
        let millis = completed_at.unix_timestamp_nanos() / 1_000_000;
        format!("{khatma_id}-{millis}")
    }

    /// Builds the record for a khatma that has reached 100%.
    ///
    /// Captures the participant set as it stands right now.
    #[must_use]
    pub fn for_khatma(khatma: &Khatma, completed_at: OffsetDateTime) -> Self {
        Self {
            id: Self::derive_id(&khatma.id, completed_at),
            khatma_id: khatma.id.clone(),
            title: khatma.title.clone(),
            created_by: khatma.created_by.clone(),
            deceased_name: khatma.deceased_name.clone(),
            completed_at,
            participants: khatma.participants(),
        }
    }
}

/// The append-only collection of completion records.
///
/// Kept newest-first in insertion order; [`CompletionLog::sorted_newest_first`]
/// is the read view ordered by completion time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLog {
    records: Vec<CompletionRecord>,
}

impl CompletionLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Wraps records loaded from storage.
    #[must_use]
    pub const fn from_records(records: Vec<CompletionRecord>) -> Self {
        Self { records }
    }

    /// Returns the records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    /// Returns whether a record with this identifier exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Prepends a record unless one with the same identifier exists.
    ///
    /// Returns whether the record was inserted. The first record written
    /// for an event wins; later derivations of the same event are dropped.
    pub fn insert_if_absent(&mut self, record: CompletionRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.records.insert(0, record);
        true
    }

    /// Ensures every fully-completed khatma has exactly one record.
    ///
    /// Runs after loading a snapshot: a khatma persisted at 100% without a
    /// matching record gets one synthesized, with `completed_at` defaulted
    /// to `now` when the aggregate carries none. Existing records are never
    /// touched. Returns how many records were synthesized.
    pub fn reconcile(&mut self, khatmas: &[Khatma], now: OffsetDateTime) -> usize {
        let mut synthesized = 0;
        for khatma in khatmas.iter().filter(|k| k.is_fully_completed()) {
            let completed_at = khatma.completed_at.unwrap_or(now);
            if self.insert_if_absent(CompletionRecord::for_khatma(khatma, completed_at)) {
                synthesized += 1;
            }
        }
        synthesized
    }

    /// Returns the records sorted newest-first by completion time.
    #[must_use]
    pub fn sorted_newest_first(&self) -> Vec<CompletionRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        sorted
    }
}
