// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed Juz catalog.
//!
//! The Quran divides into exactly 30 Juz. Each Juz has a traditional name
//! (its opening words) and spans one or more Surahs. The catalog is static
//! display data and is never mutated.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of Juz in a complete reading.
pub const JUZ_COUNT: u8 = 30;

/// Traditional Juz names, indexed by Juz number minus one.
pub const JUZ_NAMES: [&str; 30] = [
    "الم",
    "سيقول",
    "تلك الرسل",
    "لن تنالوا",
    "والمحصنات",
    "لا يحب الله",
    "وإذا سمعوا",
    "ولو أننا",
    "قال الملأ",
    "واعلموا",
    "يعتذرون",
    "وما من دابة",
    "وما أبرئ",
    "ربما",
    "سبحان الذي",
    "قال ألم",
    "اقترب",
    "قد أفلح",
    "وقال الذين",
    "أمن خلق",
    "اتلُ ما أوحي",
    "ومن يقنت",
    "وما لي",
    "فمن أظلم",
    "إليه يُرد",
    "حم",
    "قال فما خطبكم",
    "قد سمع الله",
    "تبارك",
    "عمّ",
];

/// Surah names per Juz, in reading order, indexed by Juz number minus one.
pub const JUZ_SURAHS: [&[&str]; 30] = [
    &["الفاتحة", "البقرة"],
    &["البقرة"],
    &["البقرة", "آل عمران"],
    &["آل عمران", "النساء"],
    &["النساء"],
    &["النساء", "المائدة"],
    &["المائدة", "الأنعام"],
    &["الأنعام", "الأعراف"],
    &["الأعراف", "الأنفال"],
    &["الأنفال", "التوبة"],
    &["التوبة", "يونس", "هود"],
    &["يوسف", "الرعد", "إبراهيم"],
    &["الحجر", "النحل"],
    &["النحل", "الإسراء"],
    &["الإسراء", "الكهف", "مريم"],
    &["الأنبياء", "الحج"],
    &["المؤمنون", "النور", "الفرقان"],
    &["الفرقان", "الشعراء", "النمل"],
    &["النمل", "القصص"],
    &["القصص", "العنكبوت", "الروم"],
    &["لقمان", "السجدة", "الأحزاب"],
    &["الأحزاب", "سبأ", "فاطر"],
    &["يس", "الصافات", "ص", "الزمر"],
    &["الزمر", "غافر", "فصلت"],
    &["فصلت", "الشورى", "الزخرف", "الدخان", "الجاثية"],
    &["الأحقاف", "محمد", "الفتح", "الحجرات", "ق", "الذاريات"],
    &["الطور", "النجم", "القمر", "الرحمن", "الواقعة", "الحديد"],
    &[
        "المجادلة",
        "الحشر",
        "الممتحنة",
        "الصف",
        "الجمعة",
        "المنافقون",
        "التغابن",
        "الطلاق",
        "التحريم",
    ],
    &[
        "الملك",
        "القلم",
        "الحاقة",
        "المعارج",
        "نوح",
        "الجن",
        "المزمل",
        "المدثر",
        "القيامة",
        "الإنسان",
        "المرسلات",
    ],
    &[
        "النبأ",
        "النازعات",
        "عبس",
        "التكوير",
        "الانفطار",
        "المطففين",
        "الانشقاق",
        "البروج",
        "الطارق",
        "الأعلى",
        "الغاشية",
        "الفجر",
        "البلد",
        "الشمس",
        "الليل",
        "الضحى",
        "الشرح",
        "التين",
        "العلق",
        "القدر",
        "البينة",
        "الزلزلة",
        "العاديات",
        "القارعة",
        "التكاثر",
        "العصر",
        "الهمزة",
        "الفيل",
        "قريش",
        "الماعون",
        "الكوثر",
        "الكافرون",
        "النصر",
        "المسد",
        "الإخلاص",
        "الفلق",
        "الناس",
    ],
];

/// Represents a Juz number.
///
/// Juz numbers are domain constants numbered 1 through 30.
/// The set of Juz in a khatma is fixed at creation and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct JuzNumber {
    /// The Juz number (1-30).
    number: u8,
}

impl JuzNumber {
    /// Creates a new `JuzNumber`.
    ///
    /// # Arguments
    ///
    /// * `number` - The Juz number (must be between 1 and 30 inclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidJuzNumber` if the number is not in the
    /// range 1-30.
    pub const fn new(number: u8) -> Result<Self, DomainError> {
        if number >= 1 && number <= JUZ_COUNT {
            Ok(Self { number })
        } else {
            Err(DomainError::InvalidJuzNumber(number))
        }
    }

    /// Returns the Juz number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.number
    }

    /// Iterates all thirty Juz numbers in reading order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=JUZ_COUNT).map(|number| Self { number })
    }
}

impl TryFrom<u8> for JuzNumber {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JuzNumber> for u8 {
    fn from(juz: JuzNumber) -> Self {
        juz.get()
    }
}

impl std::fmt::Display for JuzNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Returns the traditional name for a Juz number.
///
/// Out-of-catalog numbers fail soft and echo the numeral back, so display
/// code never has to handle an error for a stale reference.
#[must_use]
pub fn juz_name(juz: u8) -> String {
    match juz {
        1..=JUZ_COUNT => JUZ_NAMES[usize::from(juz) - 1].to_owned(),
        _ => juz.to_string(),
    }
}

/// Returns the Surahs spanned by a Juz number, in reading order.
///
/// Out-of-catalog numbers fail soft and return an empty slice.
#[must_use]
pub fn juz_surahs(juz: u8) -> &'static [&'static str] {
    match juz {
        1..=JUZ_COUNT => JUZ_SURAHS[usize::from(juz) - 1],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_juz_number_accepts_full_range() {
        for number in 1..=JUZ_COUNT {
            let juz = JuzNumber::new(number);
            assert!(juz.is_ok());
        }
    }

    #[test]
    fn test_juz_number_rejects_zero() {
        let result = JuzNumber::new(0);
        assert!(matches!(result, Err(DomainError::InvalidJuzNumber(0))));
    }

    #[test]
    fn test_juz_number_rejects_out_of_range() {
        let result = JuzNumber::new(31);
        assert!(matches!(result, Err(DomainError::InvalidJuzNumber(31))));
    }

    #[test]
    fn test_all_yields_thirty_in_order() {
        let numbers: Vec<u8> = JuzNumber::all().map(JuzNumber::get).collect();
        assert_eq!(numbers.len(), 30);
        assert_eq!(numbers.first(), Some(&1));
        assert_eq!(numbers.last(), Some(&30));
    }

    #[test]
    fn test_juz_name_known() {
        assert_eq!(juz_name(1), "الم");
        assert_eq!(juz_name(30), "عمّ");
    }

    #[test]
    fn test_juz_name_falls_back_to_numeral() {
        assert_eq!(juz_name(31), "31");
        assert_eq!(juz_name(0), "0");
    }

    #[test]
    fn test_juz_surahs_known() {
        assert_eq!(juz_surahs(1), ["الفاتحة", "البقرة"]);
        assert_eq!(juz_surahs(2), ["البقرة"]);
    }

    #[test]
    fn test_juz_surahs_falls_back_to_empty() {
        assert!(juz_surahs(31).is_empty());
        assert!(juz_surahs(0).is_empty());
    }

    #[test]
    fn test_every_juz_spans_at_least_one_surah() {
        for juz in 1..=JUZ_COUNT {
            assert!(!juz_surahs(juz).is_empty(), "Juz {juz} has no Surahs");
        }
    }

    #[test]
    fn test_serde_rejects_invalid_number() {
        let result: Result<JuzNumber, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip_is_transparent() {
        let juz = JuzNumber::new(7).unwrap();
        let encoded = serde_json::to_string(&juz).unwrap();
        assert_eq!(encoded, "7");
        let decoded: JuzNumber = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, juz);
    }
}
