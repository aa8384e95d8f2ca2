//! crates/mushaf_core/src/assemble.rs
//!
//! Pure page-assembly logic: turning an ordered list of normalized ayat into
//! the multi-line Arabic content of one mushaf page, and the proportional
//! slicing used when only juz-level data is available.

use crate::domain::Ayat;

/// The opening formula, prefixed to every surah except At-Tawbah (surah 9).
pub const BISMILLAH: &str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";

/// At-Tawbah canonically omits the Bismillah.
const SURAH_AT_TAWBAH: u16 = 9;

/// The rendered text portions of a page, before metadata is attached.
#[derive(Debug)]
pub struct RenderedPage {
    pub content: String,
    pub surah_info: String,
    pub ayat_range: String,
}

/// Renders an ordered ayat list into page text.
///
/// One line per ayah, `"{text} ﴿{n}﴾"`. Whenever the surah changes a header
/// line with the Arabic surah name is emitted, followed by exactly one
/// Bismillah line when the surah opens on this page (first ayah number 1)
/// and the surah is not At-Tawbah.
pub fn render_page(ayat: &[Ayat]) -> RenderedPage {
    let mut lines: Vec<String> = Vec::new();
    let mut surahs: Vec<String> = Vec::new();
    let mut current_surah: Option<u16> = None;

    for a in ayat {
        if current_surah != Some(a.surah_id) {
            current_surah = Some(a.surah_id);
            lines.push(format!("سورة {}", a.surah_name_arabic));
            surahs.push(a.surah_name_latin.clone());
            if a.ayah_number_in_surah == 1 && a.surah_id != SURAH_AT_TAWBAH {
                lines.push(BISMILLAH.to_string());
            }
        }
        lines.push(format!("{} ﴿{}﴾", a.arabic_text, a.ayah_number_in_surah));
    }

    RenderedPage {
        content: lines.join("\n"),
        surah_info: surahs.join(", "),
        ayat_range: ayat_range_label(ayat),
    }
}

/// `"ayah N"` when the page holds a single ayah number, else `"ayah N-M"`
/// over the first and last ayah numbers present.
fn ayat_range_label(ayat: &[Ayat]) -> String {
    match (ayat.first(), ayat.last()) {
        (Some(first), Some(last)) => {
            let (n, m) = (first.ayah_number_in_surah, last.ayah_number_in_surah);
            if n == m {
                format!("ayah {}", n)
            } else {
                format!("ayah {}-{}", n, m)
            }
        }
        _ => String::new(),
    }
}

/// Proportional distribution of a juz's ayat across its pages.
///
/// `ayat_per_page = ceil(total / pages_in_juz)`; the slice for the page at
/// `page_offset` (0-based within the juz) is clamped to the list length, so
/// the tail slice of an uneven division may be short or empty. Real mushaf
/// pages do not have uniform ayah density; this approximation is the
/// intended fallback behavior when page-exact data is unavailable.
pub fn page_slice(total_ayat: usize, pages_in_juz: u16, page_offset: u16) -> std::ops::Range<usize> {
    if total_ayat == 0 || pages_in_juz == 0 {
        return 0..0;
    }
    let per_page = total_ayat.div_ceil(pages_in_juz as usize);
    let start = (page_offset as usize * per_page).min(total_ayat);
    let end = (start + per_page).min(total_ayat);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayah(surah_id: u16, n: u32) -> Ayat {
        Ayat {
            arabic_text: format!("آية {}", n),
            ayah_number_in_surah: n,
            surah_id,
            surah_name_arabic: "البقرة".to_string(),
            surah_name_latin: "Al-Baqarah".to_string(),
        }
    }

    #[test]
    fn slices_cover_the_juz_without_gaps_or_overlaps() {
        // pages=4, total=10 -> ceil(10/4)=3 per page.
        let expected = [0..3, 3..6, 6..9, 9..10];
        for (offset, want) in expected.iter().enumerate() {
            assert_eq!(page_slice(10, 4, offset as u16), *want);
        }
        // The tail slice is short, not padded.
        assert_eq!(page_slice(10, 4, 3).len(), 1);
    }

    #[test]
    fn slice_past_the_data_is_empty() {
        assert_eq!(page_slice(4, 4, 3), 4..4);
        assert_eq!(page_slice(0, 20, 0), 0..0);
    }

    #[test]
    fn bismillah_follows_the_header_for_a_new_surah() {
        let rendered = render_page(&[ayah(2, 1), ayah(2, 2)]);
        let lines: Vec<&str> = rendered.content.lines().collect();
        assert_eq!(lines[0], "سورة البقرة");
        assert_eq!(lines[1], BISMILLAH);
        assert_eq!(lines[2], "آية 1 ﴿1﴾");
        assert_eq!(rendered.content.matches(BISMILLAH).count(), 1);
    }

    #[test]
    fn at_tawbah_omits_the_bismillah() {
        let rendered = render_page(&[ayah(9, 1), ayah(9, 2)]);
        assert!(!rendered.content.contains(BISMILLAH));
        assert!(rendered.content.lines().next().unwrap().starts_with("سورة"));
    }

    #[test]
    fn mid_surah_page_has_no_bismillah() {
        // A page starting at ayah 142 is a continuation, not a surah opening.
        let rendered = render_page(&[ayah(2, 142), ayah(2, 143)]);
        assert!(!rendered.content.contains(BISMILLAH));
        assert_eq!(rendered.ayat_range, "ayah 142-143");
    }

    #[test]
    fn single_ayah_range_label() {
        let rendered = render_page(&[ayah(2, 255)]);
        assert_eq!(rendered.ayat_range, "ayah 255");
        assert_eq!(rendered.surah_info, "Al-Baqarah");
    }

    #[test]
    fn surah_transition_emits_both_headers() {
        let mut first = ayah(1, 7);
        first.surah_name_arabic = "الفاتحة".to_string();
        first.surah_name_latin = "Al-Fatihah".to_string();
        let rendered = render_page(&[first, ayah(2, 1)]);
        assert!(rendered.content.contains("سورة الفاتحة"));
        assert!(rendered.content.contains("سورة البقرة"));
        assert_eq!(rendered.surah_info, "Al-Fatihah, Al-Baqarah");
        // Only Al-Baqarah opens on this page.
        assert_eq!(rendered.content.matches(BISMILLAH).count(), 1);
    }
}
