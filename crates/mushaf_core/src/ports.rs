//! crates/mushaf_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the upstream verse providers.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! resolver to be independent of any specific content API.

use crate::domain::Ayat;
use async_trait::async_trait;

//=========================================================================================
// Generic Source Error and Result Types
//=========================================================================================

/// A failure from one upstream verse source.
/// Every variant means the same thing to the resolver: try the next source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status code: {0}")]
    BadStatus(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("empty verse list")]
    Empty,
}

/// A convenience type alias for `Result<T, SourceError>`.
pub type SourceResult<T> = Result<T, SourceError>;

//=========================================================================================
// Source Ports (Traits)
//=========================================================================================

/// A provider indexed by mushaf page number. Returns the ayat of one page,
/// already in page order, normalized into the core `Ayat` record.
#[async_trait]
pub trait PageVerseSource: Send + Sync {
    /// A short stable identifier, reported in `page_info.source`.
    fn id(&self) -> &'static str;

    async fn fetch_page(&self, page: u16) -> SourceResult<Vec<Ayat>>;
}

/// A provider indexed by juz number. Returns the full juz's ayat as one flat
/// ordered list, normalized into the core `Ayat` record.
#[async_trait]
pub trait JuzVerseSource: Send + Sync {
    /// A short stable identifier, reported in `page_info.source`.
    fn id(&self) -> &'static str;

    async fn fetch_juz(&self, juz: u8) -> SourceResult<Vec<Ayat>>;
}
