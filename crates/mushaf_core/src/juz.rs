//! crates/mushaf_core/src/juz.rs
//!
//! The static juz → page mapping for the standard 604-page Uthmani mushaf,
//! plus the lookup operations built on it.
//!
//! The table is a plain compile-time constant. Ranges are contiguous and
//! non-overlapping and cover pages 1–604 exactly once, so `juz_for_page`
//! is total over every validated page number.

use crate::domain::JuzPageRange;

pub const TOTAL_PAGES: u16 = 604;
pub const TOTAL_JUZ: u8 = 30;

/// Errors for the two validated lookup operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MushafError {
    #[error("Invalid page number")]
    InvalidPage(u16),
    #[error("Invalid juz number")]
    InvalidJuz(u8),
}

/// Standard Madani layout: juz 1 spans 21 pages, juz 30 spans 23,
/// every other juz spans 20.
pub static JUZ_PAGE_RANGES: [JuzPageRange; 30] = [
    JuzPageRange { juz: 1, start_page: 1, end_page: 21, surah_label: "Al-Fatihah - Al-Baqarah" },
    JuzPageRange { juz: 2, start_page: 22, end_page: 41, surah_label: "Al-Baqarah" },
    JuzPageRange { juz: 3, start_page: 42, end_page: 61, surah_label: "Al-Baqarah - Ali 'Imran" },
    JuzPageRange { juz: 4, start_page: 62, end_page: 81, surah_label: "Ali 'Imran - An-Nisa'" },
    JuzPageRange { juz: 5, start_page: 82, end_page: 101, surah_label: "An-Nisa'" },
    JuzPageRange { juz: 6, start_page: 102, end_page: 121, surah_label: "An-Nisa' - Al-Ma'idah" },
    JuzPageRange { juz: 7, start_page: 122, end_page: 141, surah_label: "Al-Ma'idah - Al-An'am" },
    JuzPageRange { juz: 8, start_page: 142, end_page: 161, surah_label: "Al-An'am - Al-A'raf" },
    JuzPageRange { juz: 9, start_page: 162, end_page: 181, surah_label: "Al-A'raf - Al-Anfal" },
    JuzPageRange { juz: 10, start_page: 182, end_page: 201, surah_label: "Al-Anfal - At-Taubah" },
    JuzPageRange { juz: 11, start_page: 202, end_page: 221, surah_label: "At-Taubah - Hud" },
    JuzPageRange { juz: 12, start_page: 222, end_page: 241, surah_label: "Hud - Yusuf" },
    JuzPageRange { juz: 13, start_page: 242, end_page: 261, surah_label: "Yusuf - Ibrahim" },
    JuzPageRange { juz: 14, start_page: 262, end_page: 281, surah_label: "Al-Hijr - An-Nahl" },
    JuzPageRange { juz: 15, start_page: 282, end_page: 301, surah_label: "Al-Isra' - Al-Kahf" },
    JuzPageRange { juz: 16, start_page: 302, end_page: 321, surah_label: "Al-Kahf - Ta Ha" },
    JuzPageRange { juz: 17, start_page: 322, end_page: 341, surah_label: "Al-Anbiya' - Al-Hajj" },
    JuzPageRange { juz: 18, start_page: 342, end_page: 361, surah_label: "Al-Mu'minun - Al-Furqan" },
    JuzPageRange { juz: 19, start_page: 362, end_page: 381, surah_label: "Al-Furqan - An-Naml" },
    JuzPageRange { juz: 20, start_page: 382, end_page: 401, surah_label: "An-Naml - Al-'Ankabut" },
    JuzPageRange { juz: 21, start_page: 402, end_page: 421, surah_label: "Al-'Ankabut - Al-Ahzab" },
    JuzPageRange { juz: 22, start_page: 422, end_page: 441, surah_label: "Al-Ahzab - Ya Sin" },
    JuzPageRange { juz: 23, start_page: 442, end_page: 461, surah_label: "Ya Sin - Az-Zumar" },
    JuzPageRange { juz: 24, start_page: 462, end_page: 481, surah_label: "Az-Zumar - Fussilat" },
    JuzPageRange { juz: 25, start_page: 482, end_page: 501, surah_label: "Fussilat - Al-Jasiyah" },
    JuzPageRange { juz: 26, start_page: 502, end_page: 521, surah_label: "Al-Ahqaf - Az-Zariyat" },
    JuzPageRange { juz: 27, start_page: 522, end_page: 541, surah_label: "Az-Zariyat - Al-Hadid" },
    JuzPageRange { juz: 28, start_page: 542, end_page: 561, surah_label: "Al-Mujadilah - At-Tahrim" },
    JuzPageRange { juz: 29, start_page: 562, end_page: 581, surah_label: "Al-Mulk - Al-Mursalat" },
    JuzPageRange { juz: 30, start_page: 582, end_page: 604, surah_label: "An-Naba' - An-Nas" },
];

/// Finds the juz containing `page`.
///
/// Fails only for out-of-range pages; for any page in 1–604 the table
/// invariant guarantees exactly one match.
pub fn juz_for_page(page: u16) -> Result<&'static JuzPageRange, MushafError> {
    if page < 1 || page > TOTAL_PAGES {
        return Err(MushafError::InvalidPage(page));
    }
    JUZ_PAGE_RANGES
        .iter()
        .find(|r| r.start_page <= page && page <= r.end_page)
        .ok_or(MushafError::InvalidPage(page))
}

/// Pure table lookup for one juz's page range.
pub fn resolve_juz_range(juz: u8) -> Result<&'static JuzPageRange, MushafError> {
    if juz < 1 || juz > TOTAL_JUZ {
        return Err(MushafError::InvalidJuz(juz));
    }
    Ok(&JUZ_PAGE_RANGES[(juz - 1) as usize])
}

/// Returns the whole static table. Never fails.
pub fn mapping_overview() -> &'static [JuzPageRange; 30] {
    &JUZ_PAGE_RANGES
}
