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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod juz;
mod khatma;
mod part;

pub use error::DomainError;
pub use juz::{JUZ_COUNT, JUZ_NAMES, JUZ_SURAHS, JuzNumber, juz_name, juz_surahs};
pub use khatma::{Khatma, KhatmaStatus, NewKhatma};
pub use part::{KhatmaPart, PartStatus, UNKNOWN_READER};
