//! Runtime configuration for the blocklist updater.

use std::env;
use std::time::Duration;

use crate::error::UpdaterError;

/// Environment variable holding whitespace-separated source URLs
pub const SOURCES_ENV: &str = "BLOCKLIST_URLS";

/// Source used when [`SOURCES_ENV`] is unset or blank
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Maximum size per list (64 MB)
/// The largest commonly aggregated lists are a few tens of MB
pub const DEFAULT_MAX_LIST_SIZE: usize = 64 * 1024 * 1024;

/// Maximum total size for all downloads combined (512 MB)
pub const DEFAULT_MAX_TOTAL_SIZE: usize = 512 * 1024 * 1024;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source list URLs, fetched in this order
    pub sources: Vec<String>,

    /// Per-request timeout
    pub timeout: Duration,

    /// Number of sources fetched concurrently
    pub max_concurrent: usize,

    /// Per-list download cap in bytes
    pub max_list_size: usize,

    /// Download cap across all sources in bytes
    pub max_total_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: vec![DEFAULT_SOURCE_URL.to_string()],
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            max_list_size: DEFAULT_MAX_LIST_SIZE,
            max_total_size: DEFAULT_MAX_TOTAL_SIZE,
        }
    }
}

impl Config {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        let value = env::var(SOURCES_ENV).ok();
        Self::with_sources(parse_sources(value.as_deref()))
    }

    /// Default configuration with the given source list.
    pub fn with_sources(sources: Vec<String>) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), UpdaterError> {
        if self.sources.is_empty() {
            return Err(UpdaterError::Config("no source URLs configured".into()));
        }
        if self.timeout.is_zero() {
            return Err(UpdaterError::Config("timeout must be greater than zero".into()));
        }
        if self.max_concurrent == 0 {
            return Err(UpdaterError::Config(
                "concurrent fetch limit must be at least 1".into(),
            ));
        }
        if self.max_list_size == 0 || self.max_total_size == 0 {
            return Err(UpdaterError::Config("download limits must be greater than zero".into()));
        }
        Ok(())
    }
}

/// Split a [`SOURCES_ENV`] value into URLs, falling back to the default
/// source when the value is missing or blank.
pub fn parse_sources(value: Option<&str>) -> Vec<String> {
    let sources: Vec<String> = value
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if sources.is_empty() {
        vec![DEFAULT_SOURCE_URL.to_string()]
    } else {
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sources, vec![DEFAULT_SOURCE_URL.to_string()]);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_source_is_stevenblack() {
        assert!(DEFAULT_SOURCE_URL.contains("StevenBlack"));
        assert!(DEFAULT_SOURCE_URL.starts_with("https://"));
    }

    #[test]
    fn test_parse_sources_unset() {
        assert_eq!(parse_sources(None), vec![DEFAULT_SOURCE_URL.to_string()]);
    }

    #[test]
    fn test_parse_sources_blank() {
        assert_eq!(parse_sources(Some("  \n\t ")), vec![DEFAULT_SOURCE_URL.to_string()]);
    }

    #[test]
    fn test_parse_sources_whitespace_separated() {
        let sources = parse_sources(Some("http://example.com/list1 http://example.com/list2"));
        assert_eq!(sources, vec!["http://example.com/list1", "http://example.com/list2"]);

        let sources = parse_sources(Some("\n https://a.example/hosts\n\nhttps://b.example/abp.txt\t"));
        assert_eq!(sources, vec!["https://a.example/hosts", "https://b.example/abp.txt"]);
    }

    #[test]
    fn test_validation_rejects_zero_values() {
        let mut config = Config::default();
        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.max_concurrent = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.max_total_size = 0;
        assert!(config.validate().is_err());

        let config = Config::with_sources(Vec::new());
        assert!(config.validate().is_err());
    }
}
