//! crates/mushaf_core/src/domain.rs
//!
//! Defines the pure, core data structures for the resolver.
//! These structs are independent of any upstream provider's wire format.

use serde::Serialize;

/// One entry of the static juz → page mapping for the 604-page Uthmani mushaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JuzPageRange {
    pub juz: u8,
    pub start_page: u16,
    pub end_page: u16,
    pub surah_label: &'static str,
}

impl JuzPageRange {
    pub fn page_count(&self) -> u16 {
        self.end_page - self.start_page + 1
    }
}

/// One entry of the static surah name table.
#[derive(Debug, Clone, Copy)]
pub struct SurahName {
    pub id: u16,
    pub name_arabic: &'static str,
    pub name_latin: &'static str,
}

/// A single verse as normalized from any upstream source.
///
/// Transient: produced while assembling one page, never persisted.
#[derive(Debug, Clone)]
pub struct Ayat {
    pub arabic_text: String,
    pub ayah_number_in_surah: u32,
    pub surah_id: u16,
    pub surah_name_arabic: String,
    pub surah_name_latin: String,
}

/// How the content of a resolved page was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceQuality {
    /// Page-exact data from a page-indexed source.
    Exact,
    /// Juz-level data sliced proportionally across the juz's pages.
    Distributed,
    /// Static fallback content; every upstream source failed.
    Placeholder,
}

/// Metadata attached to every resolved page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u16,
    pub juz: u8,
    pub start_page: u16,
    pub end_page: u16,
    pub pages_in_juz: u16,
    pub source: String,
    pub quality: SourceQuality,
}

/// A fully assembled mushaf page, built fresh on every request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MushafPage {
    pub page: u16,
    pub juz: u8,
    /// Multi-line Arabic text: surah headers, Bismillah lines, one line per ayah.
    pub content: String,
    /// Latin names of the surahs appearing on this page, comma separated.
    pub surah_info: String,
    /// "ayah N" or "ayah N-M" over the ayah numbers present on the page.
    pub ayat_range: String,
    pub page_info: PageInfo,
}
