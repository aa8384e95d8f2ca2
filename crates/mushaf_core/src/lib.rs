pub mod assemble;
pub mod domain;
pub mod juz;
pub mod ports;
pub mod resolver;
pub mod surah;

pub use domain::{Ayat, JuzPageRange, MushafPage, PageInfo, SourceQuality, SurahName};
pub use juz::{juz_for_page, mapping_overview, resolve_juz_range, MushafError, TOTAL_JUZ, TOTAL_PAGES};
pub use ports::{JuzVerseSource, PageVerseSource, SourceError, SourceResult};
pub use resolver::MushafResolver;
pub use surah::surah_name;
