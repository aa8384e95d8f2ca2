//! crates/mushaf_core/src/resolver.rs
//!
//! The Mushaf Page Resolver: maps a page number to Arabic text content,
//! tolerating upstream failure.
//!
//! Control flow per request: juz lookup in the static table, then a
//! page-precise fetch, then the juz-indexed fallback chain with proportional
//! slicing, then the static placeholder. For an in-range page this never
//! fails; degraded content is marked via `page_info.quality`.

use crate::assemble::{self, BISMILLAH};
use crate::domain::{Ayat, JuzPageRange, MushafPage, PageInfo, SourceQuality};
use crate::juz::{self, MushafError};
use crate::ports::{JuzVerseSource, PageVerseSource, SourceResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// The literal marker embedded in placeholder content.
pub fn placeholder_marker(page: u16, juz: u8) -> String {
    format!("[page {} - juz {}] [content loading]", page, juz)
}

pub struct MushafResolver {
    page_source: Arc<dyn PageVerseSource>,
    /// Juz-level fallbacks, tried in order; first success wins.
    juz_sources: Vec<Arc<dyn JuzVerseSource>>,
    /// Per-source timeout. A slow source counts as a failed source.
    source_timeout: Duration,
}

impl MushafResolver {
    pub fn new(
        page_source: Arc<dyn PageVerseSource>,
        juz_sources: Vec<Arc<dyn JuzVerseSource>>,
        source_timeout: Duration,
    ) -> Self {
        Self {
            page_source,
            juz_sources,
            source_timeout,
        }
    }

    /// Resolves one mushaf page to its Arabic content.
    ///
    /// The only error is an out-of-range page number. Upstream failures are
    /// absorbed: the result degrades from page-exact content, to a
    /// proportional slice of juz-level content, to the static placeholder.
    pub async fn resolve_page(&self, page: u16) -> Result<MushafPage, MushafError> {
        let range = juz::juz_for_page(page)?;

        match self.fetch_with_timeout(self.page_source.fetch_page(page)).await {
            Ok(ayat) if !ayat.is_empty() => {
                info!(page, source = self.page_source.id(), "resolved page-exact content");
                return Ok(self.assemble(page, range, &ayat, self.page_source.id(), SourceQuality::Exact));
            }
            Ok(_) => {
                warn!(page, source = self.page_source.id(), "page source returned no ayat");
            }
            Err(e) => {
                warn!(page, source = self.page_source.id(), error = %e, "page source failed");
            }
        }

        for source in &self.juz_sources {
            let ayat = match self.fetch_with_timeout(source.fetch_juz(range.juz)).await {
                Ok(ayat) if !ayat.is_empty() => ayat,
                Ok(_) => {
                    warn!(juz = range.juz, source = source.id(), "juz source returned no ayat");
                    continue;
                }
                Err(e) => {
                    warn!(juz = range.juz, source = source.id(), error = %e, "juz source failed");
                    continue;
                }
            };

            let slice = assemble::page_slice(ayat.len(), range.page_count(), page - range.start_page);
            if slice.is_empty() {
                // Uneven division at the tail of the juz left nothing for
                // this page; further sources would slice the same way.
                warn!(page, juz = range.juz, source = source.id(), "distributed slice is empty");
                break;
            }
            info!(page, juz = range.juz, source = source.id(), "resolved distributed juz content");
            return Ok(self.assemble(page, range, &ayat[slice], source.id(), SourceQuality::Distributed));
        }

        warn!(page, juz = range.juz, "all sources exhausted, serving placeholder");
        Ok(placeholder_page(page, range))
    }

    async fn fetch_with_timeout<F>(&self, fetch: F) -> SourceResult<Vec<Ayat>>
    where
        F: std::future::Future<Output = SourceResult<Vec<Ayat>>>,
    {
        match tokio::time::timeout(self.source_timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(crate::ports::SourceError::Request(format!(
                "timed out after {:?}",
                self.source_timeout
            ))),
        }
    }

    fn assemble(
        &self,
        page: u16,
        range: &JuzPageRange,
        ayat: &[Ayat],
        source: &str,
        quality: SourceQuality,
    ) -> MushafPage {
        let rendered = assemble::render_page(ayat);
        MushafPage {
            page,
            juz: range.juz,
            content: rendered.content,
            surah_info: rendered.surah_info,
            ayat_range: rendered.ayat_range,
            page_info: PageInfo {
                page,
                juz: range.juz,
                start_page: range.start_page,
                end_page: range.end_page,
                pages_in_juz: range.page_count(),
                source: source.to_string(),
                quality,
            },
        }
    }
}

/// The static last-resort page: Al-Fatihah's opening verses plus a literal
/// marker naming the page and juz that could not be loaded.
fn placeholder_page(page: u16, range: &JuzPageRange) -> MushafPage {
    let content = format!(
        "سورة الفاتحة\n{BISMILLAH} ﴿1﴾\nالْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ ﴿2﴾\nالرَّحْمَٰنِ الرَّحِيمِ ﴿3﴾\nمَالِكِ يَوْمِ الدِّينِ ﴿4﴾\n\n{}",
        placeholder_marker(page, range.juz)
    );
    MushafPage {
        page,
        juz: range.juz,
        content,
        surah_info: "Al-Fatihah".to_string(),
        ayat_range: "ayah 1-4".to_string(),
        page_info: PageInfo {
            page,
            juz: range.juz,
            start_page: range.start_page,
            end_page: range.end_page,
            pages_in_juz: range.page_count(),
            source: "placeholder".to_string(),
            quality: SourceQuality::Placeholder,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SourceError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    type CallLog = Arc<Mutex<Vec<&'static str>>>;

    fn sample_ayat(count: u32) -> Vec<Ayat> {
        (1..=count)
            .map(|n| Ayat {
                arabic_text: format!("آية {}", n),
                ayah_number_in_surah: n,
                surah_id: 2,
                surah_name_arabic: "البقرة".to_string(),
                surah_name_latin: "Al-Baqarah".to_string(),
            })
            .collect()
    }

    struct ScriptedPageSource {
        name: &'static str,
        ayat: Option<Vec<Ayat>>,
        calls: CallLog,
    }

    #[async_trait]
    impl PageVerseSource for ScriptedPageSource {
        fn id(&self) -> &'static str {
            self.name
        }
        async fn fetch_page(&self, _page: u16) -> SourceResult<Vec<Ayat>> {
            self.calls.lock().unwrap().push(self.name);
            self.ayat
                .clone()
                .ok_or_else(|| SourceError::Request("connection refused".to_string()))
        }
    }

    struct ScriptedJuzSource {
        name: &'static str,
        ayat: Option<Vec<Ayat>>,
        calls: CallLog,
    }

    #[async_trait]
    impl JuzVerseSource for ScriptedJuzSource {
        fn id(&self) -> &'static str {
            self.name
        }
        async fn fetch_juz(&self, _juz: u8) -> SourceResult<Vec<Ayat>> {
            self.calls.lock().unwrap().push(self.name);
            self.ayat
                .clone()
                .ok_or_else(|| SourceError::BadStatus(503))
        }
    }

    struct StalledJuzSource {
        calls: CallLog,
    }

    #[async_trait]
    impl JuzVerseSource for StalledJuzSource {
        fn id(&self) -> &'static str {
            "stalled"
        }
        async fn fetch_juz(&self, _juz: u8) -> SourceResult<Vec<Ayat>> {
            self.calls.lock().unwrap().push("stalled");
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(sample_ayat(10))
        }
    }

    fn resolver_with(
        page_ayat: Option<Vec<Ayat>>,
        juz_sources: Vec<Arc<dyn JuzVerseSource>>,
        calls: CallLog,
    ) -> MushafResolver {
        MushafResolver::new(
            Arc::new(ScriptedPageSource {
                name: "page-src",
                ayat: page_ayat,
                calls,
            }),
            juz_sources,
            Duration::from_secs(4),
        )
    }

    #[tokio::test]
    async fn page_exact_content_short_circuits_the_chain() {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let juz_source = Arc::new(ScriptedJuzSource {
            name: "juz-a",
            ayat: Some(sample_ayat(10)),
            calls: calls.clone(),
        });
        let resolver = resolver_with(Some(sample_ayat(5)), vec![juz_source], calls.clone());

        let page = resolver.resolve_page(30).await.unwrap();
        assert_eq!(page.page_info.quality, SourceQuality::Exact);
        assert_eq!(page.page_info.source, "page-src");
        assert_eq!(*calls.lock().unwrap(), vec!["page-src"]);
    }

    #[tokio::test]
    async fn fallback_tries_sources_in_priority_order() {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let failing = Arc::new(ScriptedJuzSource {
            name: "juz-a",
            ayat: None,
            calls: calls.clone(),
        });
        let succeeding = Arc::new(ScriptedJuzSource {
            name: "juz-b",
            ayat: Some(sample_ayat(100)),
            calls: calls.clone(),
        });
        let resolver = resolver_with(None, vec![failing, succeeding], calls.clone());

        let page = resolver.resolve_page(1).await.unwrap();
        assert_eq!(page.page_info.source, "juz-b");
        assert_eq!(page.page_info.quality, SourceQuality::Distributed);
        assert_eq!(*calls.lock().unwrap(), vec!["page-src", "juz-a", "juz-b"]);
    }

    #[tokio::test]
    async fn distributed_content_slices_the_juz_proportionally() {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        // Juz 1 spans 21 pages; 105 ayat -> 5 per page.
        let source = Arc::new(ScriptedJuzSource {
            name: "juz-a",
            ayat: Some(sample_ayat(105)),
            calls: calls.clone(),
        });
        let resolver = resolver_with(None, vec![source], calls);

        let page = resolver.resolve_page(3).await.unwrap();
        // Page 3 is offset 2 within juz 1: ayat 11..=15.
        assert_eq!(page.ayat_range, "ayah 11-15");
        assert_eq!(page.content.lines().count(), 6); // header + 5 ayah lines
    }

    #[tokio::test]
    async fn exhausted_chain_yields_the_placeholder() {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let failing = Arc::new(ScriptedJuzSource {
            name: "juz-a",
            ayat: None,
            calls: calls.clone(),
        });
        let resolver = resolver_with(None, vec![failing], calls);

        let page = resolver.resolve_page(1).await.unwrap();
        assert_eq!(page.page_info.quality, SourceQuality::Placeholder);
        assert_eq!(page.page_info.source, "placeholder");
        assert_eq!(page.page_info.juz, 1);
        assert!(page.content.contains("[page 1 - juz 1] [content loading]"));
    }

    #[tokio::test]
    async fn empty_tail_slice_degrades_to_the_placeholder() {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        // 4 ayat over 21 pages: every page past the fourth gets an empty slice.
        let sparse = Arc::new(ScriptedJuzSource {
            name: "juz-a",
            ayat: Some(sample_ayat(4)),
            calls: calls.clone(),
        });
        let resolver = resolver_with(None, vec![sparse], calls);

        let page = resolver.resolve_page(21).await.unwrap();
        assert_eq!(page.page_info.quality, SourceQuality::Placeholder);
        assert!(page.content.contains("[page 21 - juz 1]"));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_source_times_out_and_the_next_one_wins() {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let stalled = Arc::new(StalledJuzSource {
            calls: calls.clone(),
        });
        let succeeding = Arc::new(ScriptedJuzSource {
            name: "juz-b",
            ayat: Some(sample_ayat(100)),
            calls: calls.clone(),
        });
        let resolver = resolver_with(None, vec![stalled, succeeding], calls.clone());

        let page = resolver.resolve_page(1).await.unwrap();
        assert_eq!(page.page_info.source, "juz-b");
        assert_eq!(*calls.lock().unwrap(), vec!["page-src", "stalled", "juz-b"]);
    }

    #[tokio::test]
    async fn out_of_range_pages_are_rejected_before_any_fetch() {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let resolver = resolver_with(Some(sample_ayat(5)), vec![], calls.clone());

        assert_eq!(resolver.resolve_page(0).await.unwrap_err(), MushafError::InvalidPage(0));
        assert_eq!(resolver.resolve_page(605).await.unwrap_err(), MushafError::InvalidPage(605));
        assert!(calls.lock().unwrap().is_empty());
    }
}
