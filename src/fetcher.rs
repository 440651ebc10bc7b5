//! HTTP fetcher for downloading source lists.

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::stream::{self, Stream, StreamExt};
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

#[cfg(test)]
use mockall::automock;

use crate::config::Config;
use crate::error::UpdaterError;
use crate::validation::validate_source_url;

/// Retrieval of a source list's raw text.
///
/// Any failure is confined to the one URL; callers log it and move on.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ListFetcher: Send + Sync {
    /// Fetch the full body of `url` as text.
    async fn fetch_list(&self, url: &str) -> Result<String, UpdaterError>;
}

/// HTTP client for fetching lists
pub struct HttpFetcher {
    client: Client,
    max_list_size: usize,
    max_total_size: usize,
    /// Cumulative download size tracker (thread-safe for concurrent fetches)
    total_downloaded: AtomicUsize,
}

impl HttpFetcher {
    /// Create a fetcher using the timeout and download limits from `config`
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("blocklist-updater/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            max_list_size: config.max_list_size,
            max_total_size: config.max_total_size,
            total_downloaded: AtomicUsize::new(0),
        })
    }

    /// Get the total bytes downloaded so far
    pub fn total_downloaded(&self) -> usize {
        self.total_downloaded.load(Ordering::Relaxed)
    }

    fn too_large(&self, url: &str, size: usize) -> UpdaterError {
        UpdaterError::TooLarge {
            url: url.to_string(),
            size,
            max: self.max_list_size,
        }
    }
}

// Note: Default is intentionally not implemented for HttpFetcher
// because new() can fail and we want explicit error handling.

#[async_trait]
impl ListFetcher for HttpFetcher {
    async fn fetch_list(&self, url: &str) -> Result<String, UpdaterError> {
        validate_source_url(url)?;

        let network = |source| UpdaterError::Network {
            url: url.to_string(),
            source,
        };

        let mut response = self.client.get(url).send().await.map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdaterError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Check Content-Length header if available
        if let Some(content_length) = response.content_length() {
            let content_length = content_length as usize;
            if content_length > self.max_list_size {
                return Err(self.too_large(url, content_length));
            }
            let current_total = self.total_downloaded();
            if current_total + content_length > self.max_total_size {
                return Err(UpdaterError::CumulativeLimit {
                    total: current_total + content_length,
                    max: self.max_total_size,
                });
            }
        }

        // Stream the body so the cap holds even without Content-Length
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(network)? {
            if body.len() + chunk.len() > self.max_list_size {
                return Err(self.too_large(url, body.len() + chunk.len()));
            }
            body.extend_from_slice(&chunk);
        }

        let new_total = self
            .total_downloaded
            .fetch_add(body.len(), Ordering::Relaxed)
            + body.len();
        if new_total > self.max_total_size {
            return Err(UpdaterError::CumulativeLimit {
                total: new_total,
                max: self.max_total_size,
            });
        }

        debug!("Downloaded {} bytes from {}", body.len(), url);

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Fetch many sources with limited parallelism.
///
/// Results come back in the order of `urls`, each paired with its URL.
/// At most `max_concurrent` requests are in flight at once.
pub fn fetch_all<'a, F>(
    fetcher: &'a F,
    urls: &'a [String],
    max_concurrent: usize,
) -> impl Stream<Item = (&'a str, Result<String, UpdaterError>)> + 'a
where
    F: ListFetcher + ?Sized,
{
    stream::iter(urls.iter().map(move |url| async move {
        (url.as_str(), fetcher.fetch_list(url).await)
    }))
    .buffered(max_concurrent.max(1))
}

/// Split a fetched body into raw lines, in original order.
///
/// Handles `\n`, `\r\n` and old Mac `\r` endings and drops a leading
/// UTF-8 BOM.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}
