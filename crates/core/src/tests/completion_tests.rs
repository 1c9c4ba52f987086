// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for completion stamping and the completion log.

use super::helpers::{complete_all_parts, seeded_store, test_details};
use khatma_domain::{KhatmaStatus, NewKhatma, PartStatus};

#[test]
fn test_full_completion_appends_exactly_one_record() {
    let mut store = seeded_store();
    let id = store.create_khatma(test_details());

    complete_all_parts(&mut store, &id);

    let log = store.completion_log();
    assert_eq!(log.len(), 1);
    let record = &log[0];
    assert_eq!(record.khatma_id, id);
    assert_eq!(record.title, "ختمة تجربة");
    assert_eq!(record.created_by, "أحمد");
    assert_eq!(record.participants, ["قارئ"]);
    assert_eq!(
        Some(record.completed_at),
        store.khatma(&id).unwrap().completed_at
    );
}

#[test]
fn test_record_id_derives_from_khatma_and_completion_time() {
    let mut store = seeded_store();
    let id = store.create_khatma(test_details());

    complete_all_parts(&mut store, &id);

    let record = &store.completion_log()[0];
    assert!(record.id.starts_with(&format!("{id}-")));
}

#[test]
fn test_toggling_a_part_away_and_back_keeps_one_record() {
    let mut store = seeded_store();
    let id = store.create_khatma(test_details());
    complete_all_parts(&mut store, &id);

    store.update_part_status(&id, 7, PartStatus::Available, None, None);
    assert_eq!(store.khatma(&id).unwrap().status, KhatmaStatus::Active);

    store.update_part_status(&id, 7, PartStatus::Completed, Some("قارئ"), None);
    assert_eq!(store.khatma(&id).unwrap().status, KhatmaStatus::Completed);

    assert_eq!(store.completion_log().len(), 1);
}

#[test]
fn test_completed_at_survives_revert_and_recompletion() {
    let mut store = seeded_store();
    let id = store.create_khatma(test_details());
    complete_all_parts(&mut store, &id);
    let stamped = store.khatma(&id).unwrap().completed_at;
    assert!(stamped.is_some());

    store.update_part_status(&id, 1, PartStatus::Reserved, Some("ريم"), None);
    assert_eq!(store.khatma(&id).unwrap().completed_at, stamped);

    store.update_part_status(&id, 1, PartStatus::Completed, None, None);
    assert_eq!(store.khatma(&id).unwrap().completed_at, stamped);
}

#[test]
fn test_repeated_completion_calls_do_not_duplicate_records() {
    let mut store = seeded_store();
    let id = store.create_khatma(test_details());
    complete_all_parts(&mut store, &id);

    // Completing an already-completed part leaves the khatma at 100%.
    store.update_part_status(&id, 30, PartStatus::Completed, Some("قارئ"), None);
    store.update_part_status(&id, 30, PartStatus::Completed, Some("قارئ"), None);

    assert_eq!(store.completion_log().len(), 1);
}

#[test]
fn test_completion_record_captures_all_participants() {
    let mut store = seeded_store();
    let id = store.create_khatma(test_details());
    for juz in 1..=29u8 {
        store.update_part_status(&id, juz, PartStatus::Completed, Some("فاطمة"), None);
    }
    store.update_part_status(&id, 30, PartStatus::Completed, Some("عمر"), None);

    let record = &store.completion_log()[0];
    assert_eq!(record.participants, ["فاطمة", "عمر"]);
}

#[test]
fn test_log_is_sorted_newest_first() {
    let mut store = seeded_store();
    let first = store.create_khatma(test_details());
    let second = store.create_khatma(NewKhatma {
        title: String::from("ختمة ثانية"),
        ..test_details()
    });

    complete_all_parts(&mut store, &first);
    complete_all_parts(&mut store, &second);

    let log = store.completion_log();
    assert_eq!(log.len(), 2);
    assert!(log[0].completed_at >= log[1].completed_at);
    assert_eq!(log[0].khatma_id, second);
    assert_eq!(log[1].khatma_id, first);
}
