// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::seed::seed_khatmas;
use khatma_audit::{CompletionLog, CompletionRecord};
use khatma_domain::{Khatma, KhatmaStatus, NewKhatma, PartStatus, juz_name, juz_surahs};
use khatma_persistence::{LoadOutcome, Persistence};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// Length of a generated khatma identifier.
const ID_LENGTH: usize = 9;

/// Alphabet for generated khatma identifiers (base-36, lowercase).
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The single source of truth for all khatmas and the completion log.
///
/// Every mutation goes through this store so the derived-field and
/// completion-log invariants hold. Each mutating method runs a synchronous
/// read-modify-persist cycle; there is no locking and no cross-process
/// coordination (two processes sharing a storage directory follow
/// last-write-wins).
///
/// The store is an explicitly constructed instance. Applications create one
/// per process and pass it where needed; read-only consumers get borrows.
pub struct KhatmaStore {
    khatmas: Vec<Khatma>,
    completion_log: CompletionLog,
    persistence: Persistence,
}

impl KhatmaStore {
    /// Opens the store over a persistence adapter.
    ///
    /// Loads the persisted snapshot, substituting the built-in seed
    /// dataset when the snapshot is absent or unusable. Every loaded
    /// khatma has its derived fields re-derived, the completion log is
    /// reconciled so each fully-completed khatma carries exactly one
    /// record, and the normalized state is persisted back.
    #[must_use]
    pub fn open(persistence: Persistence) -> Self {
        let now = OffsetDateTime::now_utc();
        let (khatmas, completion_log) = match persistence.load() {
            LoadOutcome::Loaded { khatmas, records } => {
                (khatmas, CompletionLog::from_records(records))
            }
            LoadOutcome::Fallback { reason } => {
                info!(%reason, "snapshot unusable; starting from the seed dataset");
                (seed_khatmas(now), CompletionLog::new())
            }
        };

        let mut store = Self {
            khatmas,
            completion_log,
            persistence,
        };
        for khatma in &mut store.khatmas {
            khatma.recompute(now);
        }
        let synthesized = store.completion_log.reconcile(&store.khatmas, now);
        if synthesized > 0 {
            debug!(synthesized, "reconciled completion log after load");
        }
        store.persist();
        store
    }

    /// Creates a new khatma and returns its identifier.
    ///
    /// The khatma starts with all 30 parts available, zero progress and
    /// active status, and is prepended so the collection stays
    /// newest-first. Caller-supplied strings are stored verbatim; the
    /// store performs no validation of them.
    pub fn create_khatma(&mut self, details: NewKhatma) -> String {
        let id = generate_id();
        let khatma = Khatma::new(id.clone(), details, OffsetDateTime::now_utc());
        self.khatmas.insert(0, khatma);
        self.persist();
        info!(khatma_id = %id, "created khatma");
        id
    }

    /// Transitions one part of one khatma.
    ///
    /// Unknown `khatma_id` or out-of-catalog `juz_number` is a silent
    /// no-op returning `false`; the store never errors for stale
    /// references. After an applied transition the khatma's derived
    /// fields are recomputed, and if the khatma just reached 100% its
    /// completion is stamped once and logged idempotently with the
    /// participants collected at that moment.
    ///
    /// The snapshot is persisted after every call, applied or not.
    pub fn update_part_status(
        &mut self,
        khatma_id: &str,
        juz_number: u8,
        status: PartStatus,
        user_name: Option<&str>,
        read_surahs: Option<Vec<String>>,
    ) -> bool {
        let now = OffsetDateTime::now_utc();
        let applied = match self.khatmas.iter_mut().find(|k| k.id == khatma_id) {
            Some(khatma) => {
                let applied = khatma.update_part(juz_number, status, user_name, read_surahs, now);
                if applied && khatma.status == KhatmaStatus::Completed {
                    let completed_at = khatma.completed_at.unwrap_or(now);
                    let record = CompletionRecord::for_khatma(khatma, completed_at);
                    if self.completion_log.insert_if_absent(record) {
                        info!(khatma_id, "khatma completed");
                    }
                }
                applied
            }
            None => false,
        };
        if !applied {
            debug!(khatma_id, juz_number, "part update ignored; no such target");
        }
        self.persist();
        applied
    }

    /// Returns the khatma with the given identifier, if it exists.
    ///
    /// A pull-based live view: every read reflects the latest store state.
    #[must_use]
    pub fn khatma(&self, id: &str) -> Option<&Khatma> {
        self.khatmas.iter().find(|k| k.id == id)
    }

    /// Returns the full khatma collection, newest-first.
    #[must_use]
    pub fn khatmas(&self) -> &[Khatma] {
        &self.khatmas
    }

    /// Returns the distinct participant names of a khatma.
    ///
    /// Empty for unknown identifiers.
    #[must_use]
    pub fn participants(&self, khatma_id: &str) -> Vec<String> {
        self.khatma(khatma_id)
            .map(Khatma::participants)
            .unwrap_or_default()
    }

    /// Returns the completion log, newest-first by completion time.
    #[must_use]
    pub fn completion_log(&self) -> Vec<CompletionRecord> {
        self.completion_log.sorted_newest_first()
    }

    /// Returns the traditional name of a Juz; out-of-catalog numbers echo
    /// the numeral.
    #[must_use]
    pub fn juz_name(&self, juz_number: u8) -> String {
        juz_name(juz_number)
    }

    /// Returns the Surahs of a Juz in reading order; out-of-catalog numbers
    /// yield an empty slice.
    #[must_use]
    pub fn juz_surahs(&self, juz_number: u8) -> &'static [&'static str] {
        juz_surahs(juz_number)
    }

    fn persist(&mut self) {
        if let Err(err) = self
            .persistence
            .save(&self.khatmas, self.completion_log.records())
        {
            warn!(error = %err, "persisting snapshot failed; in-memory state stays authoritative");
        }
    }
}

/// Generates an opaque khatma identifier: nine base-36 characters.
fn generate_id() -> String {
    (0..ID_LENGTH)
        .map(|_| {
            let index = rand::random_range(0..ID_ALPHABET.len());
            char::from(ID_ALPHABET[index])
        })
        .collect()
}
