//! # blocklist-updater - Domain Blocklist Aggregator
//!
//! Fetches third-party block lists (hosts files, Adblock Plus filter lists,
//! plain domain lists), normalizes every entry to a bare lower-case domain,
//! and writes a single sorted hosts file.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     blocklist-updater                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CLI (clap) + Config (BLOCKLIST_URLS)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls)                                 │
//! │    └── bounded parallel fetch, per-source failures skipped  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Classifier -> Validator -> Aggregator (DomainSet)          │
//! │    └── comments, exceptions, cosmetic rules never surface   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Report (chrono + tempfile)                                 │
//! │    └── sorted `0.0.0.0<TAB>domain` lines, mode 0664         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use blocklist_updater::config::Config;
//! use blocklist_updater::update;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let summary = update::run(&config, Path::new("blocklist.hosts")).await?;
//!     println!("{} domains", summary.total_domains);
//!     Ok(())
//! }
//! ```
//!
//! Parsing needs no network at all:
//!
//! ```
//! use blocklist_updater::aggregator::DomainSet;
//!
//! let mut set = DomainSet::new();
//! set.ingest_content("example.com\n0.0.0.0 test.com\n||ads.net^\n# comment\n@@||good.com^\n");
//! assert_eq!(set.sorted(), vec!["ads.net", "example.com", "test.com"]);
//! ```
//!
//! ## Modules
//!
//! - [`aggregator`] - Deduplicated domain set and per-source counters
//! - [`classifier`] - Line classification across list formats
//! - [`cli`] - Command-line interface definitions
//! - [`config`] - Source URLs, timeouts, download limits
//! - [`error`] - Error taxonomy
//! - [`fetcher`] - HTTP client for downloading source lists
//! - [`report`] - Hosts-file rendering and atomic write
//! - [`update`] - The fetch/aggregate/write run
//! - [`utils`] - Formatting helpers
//! - [`validation`] - Domain and URL validation

pub mod aggregator;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod report;
pub mod update;
pub mod utils;
pub mod validation;

pub use aggregator::DomainSet;
pub use config::Config;
pub use error::UpdaterError;
