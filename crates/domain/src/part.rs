// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Part status tracking and transition logic.
//!
//! This module defines the per-Juz lifecycle states and the caller-driven
//! transition between them. Transitions are unrestricted: any state may be
//! set to any other state, and a completed part may be reopened.

use crate::error::DomainError;
use crate::juz::JuzNumber;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Name recorded for a completion when neither the caller nor a prior
/// reservation supplies one.
pub const UNKNOWN_READER: &str = "مجهول";

/// Lifecycle states of a single Juz within a khatma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartStatus {
    /// Nobody has claimed the Juz yet.
    #[default]
    Available,
    /// A participant has claimed the Juz and intends to read it.
    Reserved,
    /// A participant has finished reading the Juz.
    Completed,
}

impl PartStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for PartStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidPartStatus(s.to_owned())),
        }
    }
}

impl std::fmt::Display for PartStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single Juz within a khatma.
///
/// Field exclusivity invariant, maintained by [`KhatmaPart::transition`]:
/// `reserved_by` is set only while `status` is `Reserved`, `completed_by`
/// and `read_surahs` only while `status` is `Completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KhatmaPart {
    /// The Juz this part covers (unique within its khatma).
    pub juz_number: JuzNumber,
    /// The current lifecycle state.
    pub status: PartStatus,
    /// Name of the participant holding a reservation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_by: Option<String>,
    /// Name of the participant who completed the reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    /// When the part last changed state.
    #[serde(
        default,
        with = "time::serde::iso8601::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
    /// Surahs the reader recorded as read, in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_surahs: Option<Vec<String>>,
}

impl KhatmaPart {
    /// Creates a fresh available part for a Juz.
    #[must_use]
    pub const fn new(juz_number: JuzNumber) -> Self {
        Self {
            juz_number,
            status: PartStatus::Available,
            reserved_by: None,
            completed_by: None,
            updated_at: None,
            read_surahs: None,
        }
    }

    /// Returns whether the part has been read.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, PartStatus::Completed)
    }

    /// Applies a caller-driven state transition.
    ///
    /// Any state may be set from any other state. On `Reserved` the
    /// reservation name is taken verbatim from the caller. On `Completed`
    /// the completer falls back to the prior reservation holder, then to
    /// [`UNKNOWN_READER`]. On `Available` all participant fields clear.
    /// `updated_at` is stamped on every call.
    pub fn transition(
        &mut self,
        status: PartStatus,
        user_name: Option<&str>,
        read_surahs: Option<Vec<String>>,
        now: OffsetDateTime,
    ) {
        match status {
            PartStatus::Available => {
                self.reserved_by = None;
                self.completed_by = None;
                self.read_surahs = None;
            }
            PartStatus::Reserved => {
                self.reserved_by = user_name.map(str::to_owned);
                self.completed_by = None;
                self.read_surahs = None;
            }
            PartStatus::Completed => {
                let completer = user_name
                    .map(str::to_owned)
                    .or_else(|| self.reserved_by.take())
                    .unwrap_or_else(|| UNKNOWN_READER.to_owned());
                self.completed_by = Some(completer);
                self.reserved_by = None;
                self.read_surahs = read_surahs;
            }
        }
        self.status = status;
        self.updated_at = Some(now);
    }
}
