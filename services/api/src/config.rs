//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Base URL of the primary page- and juz-indexed content API.
    pub alquran_cloud_url: String,
    /// Base URL of the quran.com v4 API, used as a juz-level fallback.
    pub quran_com_url: String,
    /// Optional internal mirror speaking the alquran.cloud wire format.
    /// When unset, the mirror is left out of the fallback chain.
    pub mirror_url: Option<String>,
    /// Per-source timeout for outbound fetches; a slow source is skipped.
    pub source_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Load Server Settings ---
        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load Upstream Source Settings ---
        let alquran_cloud_url = std::env::var("ALQURAN_CLOUD_URL")
            .unwrap_or_else(|_| "https://api.alquran.cloud".to_string());
        let quran_com_url = std::env::var("QURAN_COM_URL")
            .unwrap_or_else(|_| "https://api.quran.com".to_string());
        let mirror_url = std::env::var("MUSHAF_MIRROR_URL").ok();

        let timeout_str =
            std::env::var("SOURCE_TIMEOUT_SECS").unwrap_or_else(|_| "4".to_string());
        let timeout_secs = timeout_str.parse::<u64>().map_err(|_| {
            ConfigError::InvalidValue(
                "SOURCE_TIMEOUT_SECS".to_string(),
                format!("'{}' is not a valid number of seconds", timeout_str),
            )
        })?;
        let source_timeout = Duration::from_secs(timeout_secs);

        Ok(Self {
            bind_address,
            log_level,
            alquran_cloud_url,
            quran_com_url,
            mirror_url,
            source_timeout,
        })
    }
}
