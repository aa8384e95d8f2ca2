//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use mushaf_core::MushafResolver;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
///
/// The resolver holds the fallback chain of verse sources; the static juz and
/// surah tables are compile-time constants, so nothing here is mutable.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<MushafResolver>,
    pub config: Arc<Config>,
}
