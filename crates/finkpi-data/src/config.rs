//! Runtime configuration read from the environment.

use crate::error::{DataError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default Financial Modeling Prep API base URL
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment key holding the API key
pub const API_KEY_VAR: &str = "FMP_API_KEY";

const BASE_URL_VAR: &str = "FMP_BASE_URL";
const DATA_DIR_VAR: &str = "FINKPI_DATA_DIR";
const TIMEOUT_VAR: &str = "FMP_TIMEOUT_SECS";

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent as the `apikey` query parameter
    pub api_key: Option<String>,
    /// Base URL of the statements API
    pub base_url: String,
    /// Root directory holding `raw/` and `processed/`
    pub data_dir: PathBuf,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if it exists.
    /// A missing API key is not an error here; the upstream API rejects the
    /// unauthenticated request instead.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Config` if `FMP_TIMEOUT_SECS` is not a whole number.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let data_dir = std::env::var(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        let timeout = match std::env::var(TIMEOUT_VAR) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            base_url,
            data_dir,
            timeout,
        })
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the request timeout.
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Directory holding raw API responses.
    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }

    /// Directory holding processed CSV tables.
    pub fn processed_dir(&self) -> PathBuf {
        self.data_dir.join("processed")
    }

    /// Data directory root.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| DataError::Config {
            key: TIMEOUT_VAR.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(config.raw_dir(), PathBuf::from("data/raw"));
        assert_eq!(config.processed_dir(), PathBuf::from("data/processed"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_api_key("secret")
            .with_base_url("http://localhost:9000")
            .with_data_dir("/tmp/finkpi")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.raw_dir(), PathBuf::from("/tmp/finkpi/raw"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(" 12 ").unwrap(), Duration::from_secs(12));
        assert!(matches!(
            parse_timeout("soon"),
            Err(DataError::Config { .. })
        ));
    }
}
