// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The built-in seed dataset.
//!
//! Used whenever no usable snapshot exists: a fresh installation and a
//! corrupt snapshot both land here. Two example campaigns give the UI
//! something meaningful to render on first launch.

use khatma_domain::{Khatma, NewKhatma, PartStatus, juz_surahs};
use time::OffsetDateTime;

/// Completers of the first three Juz in the Ramadan seed campaign.
const RAMADAN_READERS: [&str; 3] = ["فاطمة", "عمر", "خالد"];

/// Completers of the first fifteen Juz in the memorial seed campaign.
const MEMORIAL_READERS: [&str; 15] = [
    "أحمد", "فاطمة", "محمد", "علي", "نورة", "خالد", "ريم", "عمر", "سارة", "يوسف", "مريم", "حسن",
    "دانة", "سلطان", "هدى",
];

/// Builds the seed dataset, stamped with `now`.
///
/// Derived fields come from [`Khatma::recompute`], not hand-written
/// constants, so the seeds satisfy the same invariants as live data.
#[must_use]
pub fn seed_khatmas(now: OffsetDateTime) -> Vec<Khatma> {
    vec![ramadan_khatma(now), memorial_khatma(now)]
}

fn ramadan_khatma(now: OffsetDateTime) -> Khatma {
    let mut khatma = Khatma::new(
        String::from("k1"),
        NewKhatma {
            title: String::from("ختمة شهر رمضان المبارك"),
            created_by: String::from("محمد أحمد"),
            deceased_name: None,
            description: String::from("ختمة جماعية بنية التيسير والقبول."),
            deceased_death_date: None,
        },
        now,
    );
    for (juz, reader) in (1u8..).zip(RAMADAN_READERS) {
        let part = &mut khatma.parts[usize::from(juz) - 1];
        part.status = PartStatus::Completed;
        part.completed_by = Some(reader.to_owned());
        part.read_surahs = Some(owned_surahs(juz));
    }
    khatma.parts[3].status = PartStatus::Reserved;
    khatma.parts[3].reserved_by = Some(String::from("أحمد"));
    khatma.recompute(now);
    khatma
}

fn memorial_khatma(now: OffsetDateTime) -> Khatma {
    let mut khatma = Khatma::new(
        String::from("k2"),
        NewKhatma {
            title: String::from("ختمة للمرحوم الوالد"),
            created_by: String::from("سارة عبدالله"),
            deceased_name: Some(String::from("عبدالله بن محمد")),
            description: String::from("اللهم اغفر له وارحمه."),
            deceased_death_date: Some(time::macros::datetime!(2023-05-15 0:00 UTC)),
        },
        now,
    );
    for (juz, reader) in (1u8..).zip(MEMORIAL_READERS) {
        let part = &mut khatma.parts[usize::from(juz) - 1];
        part.status = PartStatus::Completed;
        part.completed_by = Some(reader.to_owned());
        part.read_surahs = Some(owned_surahs(juz));
    }
    khatma.recompute(now);
    khatma
}

fn owned_surahs(juz: u8) -> Vec<String> {
    juz_surahs(juz).iter().map(|s| (*s).to_owned()).collect()
}
