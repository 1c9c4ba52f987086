// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-value storage backends.
//!
//! Snapshots live under fixed string keys, mirroring the browser local
//! storage the application state was designed around. Two backends exist:
//!
//! - **File** (default for the CLI) — one JSON document per key inside a
//!   storage directory. Durable across sessions.
//! - **Memory** — an in-process map. Used by tests and ephemeral runs.
//!
//! Backend selection happens once at construction time and is transparent
//! to callers of the [`crate::Persistence`] adapter.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
