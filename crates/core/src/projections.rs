// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived read views over the store.
//!
//! Everything here is a pure function of the store's current state,
//! recomputed on every read. There is no cache to go stale: a view read
//! immediately after a mutation always reflects that mutation.

use crate::store::KhatmaStore;
use khatma_domain::Khatma;
use std::collections::HashSet;

/// Aggregate statistics across all khatmas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of khatmas in the collection.
    pub total_khatmas: usize,
    /// Total parts read across all khatmas.
    pub completed_parts: usize,
    /// Distinct participant names across all khatmas.
    pub distinct_participants: usize,
}

impl KhatmaStore {
    /// Computes the aggregate statistics shown on the landing view.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let khatmas = self.khatmas();
        let completed_parts = khatmas.iter().map(Khatma::completed_count).sum();
        let mut participants: HashSet<&str> = HashSet::new();
        for khatma in khatmas {
            for part in &khatma.parts {
                for name in [&part.completed_by, &part.reserved_by] {
                    if let Some(name) = name
                        && !name.is_empty()
                    {
                        participants.insert(name.as_str());
                    }
                }
            }
        }
        StoreStats {
            total_khatmas: khatmas.len(),
            completed_parts,
            distinct_participants: participants.len(),
        }
    }

    /// Filters the collection by a search query.
    ///
    /// Case-insensitive substring match over title, creator and deceased
    /// name. A blank query returns the whole collection, preserving the
    /// newest-first order either way.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Khatma> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.khatmas().iter().collect();
        }
        self.khatmas()
            .iter()
            .filter(|k| {
                k.title.to_lowercase().contains(&query)
                    || k.created_by.to_lowercase().contains(&query)
                    || k.deceased_name
                        .as_ref()
                        .is_some_and(|name| name.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Returns whether the collection holds no khatmas at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.khatmas().is_empty()
    }
}
