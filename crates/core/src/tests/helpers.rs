// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::KhatmaStore;
use khatma_domain::{NewKhatma, PartStatus};
use khatma_persistence::Persistence;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for unique on-disk test directories.
///
/// Eliminates time-based collisions between parallel test threads.
static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Opens a store over an empty in-memory adapter.
///
/// An empty adapter has no snapshot, so the store starts from the seed
/// dataset: `k1` (3 parts read, 1 reserved) and `k2` (15 parts read).
pub fn seeded_store() -> KhatmaStore {
    KhatmaStore::open(Persistence::new_in_memory())
}

pub fn test_details() -> NewKhatma {
    NewKhatma {
        title: String::from("ختمة تجربة"),
        created_by: String::from("أحمد"),
        deceased_name: None,
        description: String::from("دعاء"),
        deceased_death_date: None,
    }
}

/// Marks every part of a khatma as read by the same participant.
pub fn complete_all_parts(store: &mut KhatmaStore, khatma_id: &str) {
    for juz in 1..=30 {
        store.update_part_status(khatma_id, juz, PartStatus::Completed, Some("قارئ"), None);
    }
}

pub fn unique_data_dir() -> PathBuf {
    let dir_id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("khatma-store-test-{}-{dir_id}", std::process::id()))
}
