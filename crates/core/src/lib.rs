// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The collaborative reading store for the Khatma tracker.
//!
//! [`KhatmaStore`] owns the khatma collection and the completion log and
//! is the only writer to either. UI consumers call its mutation methods
//! and read its pull-based views; every mutation persists a full snapshot
//! through the injected [`khatma_persistence::Persistence`] adapter.

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

mod projections;
mod seed;
mod store;

#[cfg(test)]
mod tests;

pub use projections::StoreStats;
pub use seed::seed_khatmas;
pub use store::KhatmaStore;
