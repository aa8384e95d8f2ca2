//! services/api/src/adapters/quran_com.rs
//!
//! This module contains the adapter for the quran.com v4 API, used as a
//! juz-level fallback. It implements the `JuzVerseSource` port from the
//! `core` crate.
//!
//! The provider returns verse keys ("surah:ayah") without surah names, so
//! display names are resolved from the core surah table.

use async_trait::async_trait;
use mushaf_core::ports::{JuzVerseSource, SourceError, SourceResult};
use mushaf_core::{surah_name, Ayat};
use serde::Deserialize;

/// The provider caps verse listings; larger juz are fetched page by page.
const PER_PAGE: u16 = 50;

//=========================================================================================
// Wire Format
//=========================================================================================

#[derive(Deserialize)]
struct VersesResponse {
    verses: Vec<WireVerse>,
    pagination: Pagination,
}

#[derive(Deserialize)]
struct WireVerse {
    /// "surah:ayah", e.g. "2:142".
    verse_key: String,
    text_uthmani: String,
}

#[derive(Deserialize)]
struct Pagination {
    next_page: Option<u32>,
}

/// Splits a "surah:ayah" key into its numeric parts.
fn parse_verse_key(key: &str) -> SourceResult<(u16, u32)> {
    let (surah, ayah) = key
        .split_once(':')
        .ok_or_else(|| SourceError::Malformed(format!("bad verse key '{}'", key)))?;
    let surah_id = surah
        .parse::<u16>()
        .map_err(|_| SourceError::Malformed(format!("bad surah in verse key '{}'", key)))?;
    let ayah_number = ayah
        .parse::<u32>()
        .map_err(|_| SourceError::Malformed(format!("bad ayah in verse key '{}'", key)))?;
    Ok((surah_id, ayah_number))
}

fn normalize(verses: Vec<WireVerse>) -> SourceResult<Vec<Ayat>> {
    verses
        .into_iter()
        .map(|v| {
            let (surah_id, ayah_number_in_surah) = parse_verse_key(&v.verse_key)?;
            let surah = surah_name(surah_id).ok_or_else(|| {
                SourceError::Malformed(format!("unknown surah id {}", surah_id))
            })?;
            Ok(Ayat {
                arabic_text: v.text_uthmani,
                ayah_number_in_surah,
                surah_id,
                surah_name_arabic: surah.name_arabic.to_string(),
                surah_name_latin: surah.name_latin.to_string(),
            })
        })
        .collect()
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `JuzVerseSource` port using the quran.com v4 API.
#[derive(Clone)]
pub struct QuranComSource {
    client: reqwest::Client,
    base_url: String,
}

impl QuranComSource {
    /// Creates a new `QuranComSource`.
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn fetch_listing_page(&self, juz: u8, listing_page: u32) -> SourceResult<VersesResponse> {
        let url = format!(
            "{}/api/v4/verses/by_juz/{}?fields=text_uthmani&per_page={}&page={}",
            self.base_url.trim_end_matches('/'),
            juz,
            PER_PAGE,
            listing_page
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(SourceError::BadStatus(response.status().as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))
    }
}

//=========================================================================================
// `JuzVerseSource` Trait Implementation
//=========================================================================================

#[async_trait]
impl JuzVerseSource for QuranComSource {
    fn id(&self) -> &'static str {
        "quran.com"
    }

    /// Fetches one full juz, following the provider's listing pagination
    /// until exhausted.
    async fn fetch_juz(&self, juz: u8) -> SourceResult<Vec<Ayat>> {
        let mut verses = Vec::new();
        let mut listing_page = 1u32;
        loop {
            let body = self.fetch_listing_page(juz, listing_page).await?;
            verses.extend(body.verses);
            match body.pagination.next_page {
                Some(next) => listing_page = next,
                None => break,
            }
        }
        if verses.is_empty() {
            return Err(SourceError::Empty);
        }
        normalize(verses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "verses": [
            {"id": 148, "verse_key": "2:142", "text_uthmani": "سَيَقُولُ السُّفَهَاءُ"},
            {"id": 149, "verse_key": "2:143", "text_uthmani": "وَكَذَٰلِكَ جَعَلْنَاكُمْ"}
        ],
        "pagination": {"per_page": 50, "current_page": 1, "next_page": null, "total_pages": 1, "total_records": 2}
    }"#;

    #[test]
    fn normalizes_verse_keys_and_resolves_names() {
        let body: VersesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert!(body.pagination.next_page.is_none());
        let ayat = normalize(body.verses).unwrap();
        assert_eq!(ayat.len(), 2);
        assert_eq!(ayat[0].surah_id, 2);
        assert_eq!(ayat[0].ayah_number_in_surah, 142);
        assert_eq!(ayat[0].surah_name_latin, "Al-Baqarah");
        assert_eq!(ayat[0].surah_name_arabic, "البقرة");
    }

    #[test]
    fn malformed_verse_keys_are_rejected() {
        assert!(matches!(parse_verse_key("2-142"), Err(SourceError::Malformed(_))));
        assert!(matches!(parse_verse_key("x:1"), Err(SourceError::Malformed(_))));
        let out_of_range = vec![WireVerse {
            verse_key: "115:1".to_string(),
            text_uthmani: "نص".to_string(),
        }];
        assert!(matches!(normalize(out_of_range), Err(SourceError::Malformed(_))));
    }
}
