//! Error types for the blocklist updater.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid source URL '{0}': only http:// and https:// are supported")]
    InvalidUrl(String),

    #[error("Network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("List too large from {url}: {size} bytes (max: {max} bytes)")]
    TooLarge { url: String, size: usize, max: usize },

    #[error("Cumulative download limit exceeded: {total} bytes (max: {max} bytes)")]
    CumulativeLimit { total: usize, max: usize },

    #[error("Write error: {0}")]
    Write(String),
}
