//! services/api/src/adapters/alquran_cloud.rs
//!
//! This module contains the adapter for the alquran.cloud content API.
//! It implements both the `PageVerseSource` and `JuzVerseSource` ports from
//! the `core` crate: the same provider is page-indexed (the primary source)
//! and juz-indexed (the first fallback).
//!
//! An internal mirror speaking the same wire format can be mounted as a
//! second instance with a different base URL and source id.

use async_trait::async_trait;
use mushaf_core::ports::{JuzVerseSource, PageVerseSource, SourceError, SourceResult};
use mushaf_core::Ayat;
use serde::Deserialize;

//=========================================================================================
// Wire Format
//=========================================================================================

/// The provider's response envelope: `{code, status, data}`.
#[derive(Deserialize)]
struct Envelope {
    code: u16,
    data: EnvelopeData,
}

#[derive(Deserialize)]
struct EnvelopeData {
    ayahs: Vec<WireAyah>,
}

#[derive(Deserialize)]
struct WireAyah {
    text: String,
    #[serde(rename = "numberInSurah")]
    number_in_surah: u32,
    surah: WireSurah,
}

#[derive(Deserialize)]
struct WireSurah {
    number: u16,
    /// Arabic name, e.g. "سُورَةُ البَقَرَةِ".
    name: String,
    #[serde(rename = "englishName")]
    english_name: String,
}

fn normalize(ayahs: Vec<WireAyah>) -> Vec<Ayat> {
    ayahs
        .into_iter()
        .map(|a| Ayat {
            arabic_text: a.text,
            ayah_number_in_surah: a.number_in_surah,
            surah_id: a.surah.number,
            surah_name_arabic: a.surah.name,
            surah_name_latin: a.surah.english_name,
        })
        .collect()
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter for the alquran.cloud API (or an API-compatible mirror).
#[derive(Clone)]
pub struct AlQuranCloudSource {
    client: reqwest::Client,
    base_url: String,
    id: &'static str,
}

impl AlQuranCloudSource {
    /// Creates the adapter for the public alquran.cloud API.
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            id: "alquran.cloud",
        }
    }

    /// Creates the adapter for an internal alquran.cloud-compatible mirror.
    pub fn mirror(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            id: "mirror",
        }
    }

    async fn fetch(&self, path: &str) -> SourceResult<Vec<Ayat>> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(SourceError::BadStatus(response.status().as_u16()));
        }
        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))?;
        if envelope.code != 200 {
            return Err(SourceError::BadStatus(envelope.code));
        }
        let ayat = normalize(envelope.data.ayahs);
        if ayat.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(ayat)
    }
}

//=========================================================================================
// Source Port Implementations
//=========================================================================================

#[async_trait]
impl PageVerseSource for AlQuranCloudSource {
    fn id(&self) -> &'static str {
        self.id
    }

    /// Fetches one mushaf page in the Uthmani edition; the ayat arrive
    /// already page-ordered.
    async fn fetch_page(&self, page: u16) -> SourceResult<Vec<Ayat>> {
        self.fetch(&format!("v1/page/{}/quran-uthmani", page)).await
    }
}

#[async_trait]
impl JuzVerseSource for AlQuranCloudSource {
    fn id(&self) -> &'static str {
        self.id
    }

    /// Fetches one full juz in the Uthmani edition as a flat ordered list.
    async fn fetch_juz(&self, juz: u8) -> SourceResult<Vec<Ayat>> {
        self.fetch(&format!("v1/juz/{}/quran-uthmani", juz)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "number": 1,
            "ayahs": [
                {
                    "number": 1,
                    "text": "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
                    "numberInSurah": 1,
                    "surah": {
                        "number": 1,
                        "name": "سُورَةُ الفَاتِحَةِ",
                        "englishName": "Al-Faatiha"
                    }
                },
                {
                    "number": 2,
                    "text": "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ",
                    "numberInSurah": 2,
                    "surah": {
                        "number": 1,
                        "name": "سُورَةُ الفَاتِحَةِ",
                        "englishName": "Al-Faatiha"
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn normalizes_the_provider_shape() {
        let envelope: Envelope = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(envelope.code, 200);
        let ayat = normalize(envelope.data.ayahs);
        assert_eq!(ayat.len(), 2);
        assert_eq!(ayat[0].surah_id, 1);
        assert_eq!(ayat[0].ayah_number_in_surah, 1);
        assert_eq!(ayat[1].surah_name_latin, "Al-Faatiha");
        assert!(ayat[1].arabic_text.contains("الْحَمْدُ"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        // The real API carries many more fields (edition, meta, audio, ...).
        let envelope: Envelope = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(envelope.data.ayahs.len(), 2);
    }
}
