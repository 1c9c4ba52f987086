// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The khatma aggregate.
//!
//! A khatma is a collaborative reading campaign over the 30 fixed Juz.
//! `progress`, `status` and `completed_at` are derived fields recomputed
//! after every part change; callers never set them directly.

use crate::error::DomainError;
use crate::juz::{JUZ_COUNT, JuzNumber};
use crate::part::{KhatmaPart, PartStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Aggregate lifecycle state of a khatma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KhatmaStatus {
    /// At least one Juz is still unread.
    #[default]
    Active,
    /// All 30 Juz have been read.
    Completed,
}

impl KhatmaStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for KhatmaStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidKhatmaStatus(s.to_owned())),
        }
    }
}

impl std::fmt::Display for KhatmaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied fields for a new khatma.
///
/// The store performs no validation of these values; callers are expected
/// to require non-empty title, creator and description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewKhatma {
    /// Campaign title.
    pub title: String,
    /// Name of the person who opened the campaign.
    pub created_by: String,
    /// Name of the deceased the reward is dedicated to.
    pub deceased_name: Option<String>,
    /// Free-text intention or dedication.
    pub description: String,
    /// Date of death, when the campaign is a dedication.
    pub deceased_death_date: Option<OffsetDateTime>,
}

/// A collaborative reading campaign through the whole Quran.
///
/// Owns exactly 30 parts, ordered by Juz number. The part set is fixed at
/// creation and never grows or shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Khatma {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    /// Campaign title.
    pub title: String,
    /// Name of the person who opened the campaign.
    pub created_by: String,
    /// Name of the deceased the reward is dedicated to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deceased_name: Option<String>,
    /// Date of death, when the campaign is a dedication.
    #[serde(
        default,
        with = "time::serde::iso8601::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deceased_death_date: Option<OffsetDateTime>,
    /// Free-text intention or dedication.
    pub description: String,
    /// When the campaign was created, immutable.
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
    /// Derived aggregate state.
    pub status: KhatmaStatus,
    /// Derived completion percentage, 0-100.
    pub progress: u8,
    /// The 30 parts, ordered by Juz number.
    pub parts: Vec<KhatmaPart>,
    /// When the campaign first reached 100%. Set once; a later part revert
    /// reverts `status` to active but leaves this historical fact in place.
    #[serde(
        default,
        with = "time::serde::iso8601::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<OffsetDateTime>,
}

impl Khatma {
    /// Creates a new khatma with all 30 parts available.
    #[must_use]
    pub fn new(id: String, details: NewKhatma, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            title: details.title,
            created_by: details.created_by,
            deceased_name: details.deceased_name,
            deceased_death_date: details.deceased_death_date,
            description: details.description,
            created_at,
            status: KhatmaStatus::Active,
            progress: 0,
            parts: JuzNumber::all().map(KhatmaPart::new).collect(),
            completed_at: None,
        }
    }

    /// Returns how many parts have been read.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_completed()).count()
    }

    /// Returns whether every part has been read.
    #[must_use]
    pub fn is_fully_completed(&self) -> bool {
        self.completed_count() == usize::from(JUZ_COUNT)
    }

    /// Re-derives `progress`, `status` and `completed_at` from the parts.
    ///
    /// `completed_at` is stamped with `now` the first time the khatma
    /// reaches 100% and never cleared or overwritten afterwards.
    ///
    /// Returns whether the khatma is fully completed.
    pub fn recompute(&mut self, now: OffsetDateTime) -> bool {
        let completed = self.completed_count();
        self.progress = progress_for(completed);
        let fully_completed = completed == usize::from(JUZ_COUNT);
        self.status = if fully_completed {
            KhatmaStatus::Completed
        } else {
            KhatmaStatus::Active
        };
        if fully_completed && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
        fully_completed
    }

    /// Transitions one part and re-derives the aggregate fields.
    ///
    /// Returns `false` without touching anything when `juz_number` does not
    /// name one of the 30 parts.
    pub fn update_part(
        &mut self,
        juz_number: u8,
        status: PartStatus,
        user_name: Option<&str>,
        read_surahs: Option<Vec<String>>,
        now: OffsetDateTime,
    ) -> bool {
        let Some(part) = self
            .parts
            .iter_mut()
            .find(|p| p.juz_number.get() == juz_number)
        else {
            return false;
        };
        part.transition(status, user_name, read_surahs, now);
        self.recompute(now);
        true
    }

    /// Collects the distinct participant names across all parts.
    ///
    /// Union of non-empty `completed_by`/`reserved_by` values, in first
    /// appearance order.
    #[must_use]
    pub fn participants(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for part in &self.parts {
            for name in [&part.completed_by, &part.reserved_by] {
                if let Some(name) = name
                    && !name.is_empty()
                    && !names.iter().any(|seen| seen == name)
                {
                    names.push(name.clone());
                }
            }
        }
        names
    }
}

/// Completion percentage for a read-part count, rounded to the nearest
/// whole percent (half away from zero, matching the UI's arithmetic).
#[must_use]
fn progress_for(completed: usize) -> u8 {
    let rounded = (completed * 100 + usize::from(JUZ_COUNT) / 2) / usize::from(JUZ_COUNT);
    u8::try_from(rounded).unwrap_or(u8::MAX)
}
