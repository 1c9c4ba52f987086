// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{COMPLETION_LOG_KEY, KHATMAS_KEY, LoadOutcome, Persistence};
use khatma_audit::CompletionRecord;
use khatma_domain::{Khatma, NewKhatma, PartStatus};
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Atomic counter for unique on-disk test directories.
///
/// Eliminates time-based collisions between parallel test threads.
static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

fn test_now() -> OffsetDateTime {
    time::macros::datetime!(2026-03-01 12:00 UTC)
}

fn sample_khatma(id: &str) -> Khatma {
    let mut khatma = Khatma::new(
        String::from(id),
        NewKhatma {
            title: String::from("ختمة شهر رمضان المبارك"),
            created_by: String::from("محمد أحمد"),
            deceased_name: Some(String::from("عبدالله بن محمد")),
            description: String::from("ختمة جماعية بنية التيسير والقبول."),
            deceased_death_date: Some(time::macros::datetime!(2023-05-15 0:00 UTC)),
        },
        test_now(),
    );
    khatma.update_part(1, PartStatus::Completed, Some("فاطمة"), None, test_now());
    khatma.update_part(2, PartStatus::Reserved, Some("أحمد"), None, test_now());
    khatma
}

fn fully_completed_khatma(id: &str) -> Khatma {
    let mut khatma = sample_khatma(id);
    for juz in 1..=30 {
        khatma.update_part(juz, PartStatus::Completed, Some("قارئ"), None, test_now());
    }
    khatma
}

fn unique_test_dir() -> std::path::PathBuf {
    let dir_id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("khatma-persistence-test-{}-{dir_id}", std::process::id()))
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn test_memory_round_trip_reproduces_collections() {
    let mut persistence = Persistence::new_in_memory();
    let khatmas = vec![sample_khatma("k1"), fully_completed_khatma("k2")];
    let records = vec![CompletionRecord::for_khatma(&khatmas[1], test_now())];

    persistence.save(&khatmas, &records).unwrap();

    match persistence.load() {
        LoadOutcome::Loaded {
            khatmas: loaded_khatmas,
            records: loaded_records,
        } => {
            assert_eq!(loaded_khatmas, khatmas);
            assert_eq!(loaded_records, records);
        }
        LoadOutcome::Fallback { reason } => panic!("unexpected fallback: {reason}"),
    }
}

#[test]
fn test_round_trip_revives_date_fields() {
    let mut persistence = Persistence::new_in_memory();
    let khatmas = vec![sample_khatma("k1")];

    persistence.save(&khatmas, &[]).unwrap();

    let LoadOutcome::Loaded {
        khatmas: loaded, ..
    } = persistence.load()
    else {
        panic!("expected loaded outcome");
    };
    assert_eq!(loaded[0].created_at, test_now());
    assert_eq!(
        loaded[0].deceased_death_date,
        Some(time::macros::datetime!(2023-05-15 0:00 UTC))
    );
    assert_eq!(loaded[0].parts[0].updated_at, Some(test_now()));
}

#[test]
fn test_dates_are_encoded_as_iso8601_strings() {
    let mut persistence = Persistence::new_in_memory();
    persistence.save(&[sample_khatma("k1")], &[]).unwrap();

    let raw = persistence.read(KHATMAS_KEY).unwrap().unwrap();
    assert!(raw.contains("\"createdAt\":\"2026-03-01T12:00:00"));
    assert!(raw.contains("\"deceasedDeathDate\":\"2023-05-15T00:00:00"));
}

#[test]
fn test_file_round_trip_survives_reopen() {
    let dir = unique_test_dir();
    let khatmas = vec![sample_khatma("k1")];

    {
        let mut persistence = Persistence::new_with_dir(&dir).unwrap();
        persistence.save(&khatmas, &[]).unwrap();
    }

    let reopened = Persistence::new_with_dir(&dir).unwrap();
    match reopened.load() {
        LoadOutcome::Loaded {
            khatmas: loaded, ..
        } => assert_eq!(loaded, khatmas),
        LoadOutcome::Fallback { reason } => panic!("unexpected fallback: {reason}"),
    }

    std::fs::remove_dir_all(&dir).ok();
}

// ============================================================================
// Fallback contract
// ============================================================================

#[test]
fn test_missing_snapshot_falls_back() {
    let persistence = Persistence::new_in_memory();

    match persistence.load() {
        LoadOutcome::Fallback { reason } => assert!(reason.contains(KHATMAS_KEY)),
        LoadOutcome::Loaded { .. } => panic!("expected fallback for missing snapshot"),
    }
}

#[test]
fn test_corrupt_khatma_snapshot_falls_back() {
    let mut persistence = Persistence::new_in_memory();
    persistence.write(KHATMAS_KEY, "{not json").unwrap();

    match persistence.load() {
        LoadOutcome::Fallback { reason } => assert!(reason.contains("parsing")),
        LoadOutcome::Loaded { .. } => panic!("expected fallback for corrupt snapshot"),
    }
}

#[test]
fn test_unexpected_shape_falls_back() {
    let mut persistence = Persistence::new_in_memory();
    persistence
        .write(KHATMAS_KEY, r#"{"title":"not a list"}"#)
        .unwrap();

    assert!(matches!(
        persistence.load(),
        LoadOutcome::Fallback { .. }
    ));
}

#[test]
fn test_empty_khatma_list_falls_back() {
    let mut persistence = Persistence::new_in_memory();
    persistence.write(KHATMAS_KEY, "[]").unwrap();

    match persistence.load() {
        LoadOutcome::Fallback { reason } => assert!(reason.contains("empty")),
        LoadOutcome::Loaded { .. } => panic!("expected fallback for empty snapshot"),
    }
}

#[test]
fn test_corrupt_completion_log_falls_back() {
    let mut persistence = Persistence::new_in_memory();
    persistence.save(&[sample_khatma("k1")], &[]).unwrap();
    persistence.write(COMPLETION_LOG_KEY, "][").unwrap();

    assert!(matches!(
        persistence.load(),
        LoadOutcome::Fallback { .. }
    ));
}

#[test]
fn test_missing_completion_log_loads_with_empty_log() {
    let mut persistence = Persistence::new_in_memory();
    let khatmas = vec![sample_khatma("k1")];
    let encoded = serde_json::to_string(&khatmas).unwrap();
    persistence.write(KHATMAS_KEY, &encoded).unwrap();

    match persistence.load() {
        LoadOutcome::Loaded { records, .. } => assert!(records.is_empty()),
        LoadOutcome::Fallback { reason } => panic!("unexpected fallback: {reason}"),
    }
}

#[test]
fn test_out_of_range_juz_number_in_snapshot_falls_back() {
    let mut persistence = Persistence::new_in_memory();
    let khatmas = vec![sample_khatma("k1")];
    let encoded = serde_json::to_string(&khatmas)
        .unwrap()
        .replace("\"juzNumber\":30", "\"juzNumber\":99");
    persistence.write(KHATMAS_KEY, &encoded).unwrap();

    assert!(matches!(
        persistence.load(),
        LoadOutcome::Fallback { .. }
    ));
}
