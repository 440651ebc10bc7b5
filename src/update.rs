//! Update run: fetch every source, aggregate, write the hosts file.

use anyhow::{Context, Result};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::aggregator::{DomainSet, SourceStats};
use crate::config::Config;
use crate::fetcher::{fetch_all, HttpFetcher, ListFetcher};
use crate::report::write_hosts_file;
use crate::utils::{display_url, format_size, group_digits};

/// Outcome of one source within a run
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub url: String,
    /// Ingest counters, or the reason the fetch failed
    pub result: Result<SourceStats, String>,
}

/// Everything a finished run reports
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub sources: Vec<SourceReport>,
    pub total_domains: usize,
    pub output: PathBuf,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.sources.iter().filter(|s| s.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.sources.len() - self.succeeded()
    }
}

/// Fetch every configured source and fold its lines into one set.
///
/// A source that fails contributes nothing and is recorded in the returned
/// reports; it never stops the remaining sources.
pub async fn collect_domains<F>(fetcher: &F, config: &Config) -> (DomainSet, Vec<SourceReport>)
where
    F: ListFetcher + ?Sized,
{
    let mut domains = DomainSet::new();
    let mut reports = Vec::with_capacity(config.sources.len());

    info!("Fetching {} source(s)...", config.sources.len());

    let mut results = std::pin::pin!(fetch_all(fetcher, &config.sources, config.max_concurrent));
    while let Some((url, result)) = results.next().await {
        let result = match result {
            Ok(content) => {
                let stats = domains.ingest_content(&content);
                info!(
                    "Fetched {} - {} domains ({} new, {})",
                    display_url(url, 60),
                    group_digits(stats.valid),
                    group_digits(stats.added),
                    format_size(stats.bytes)
                );
                Ok(stats)
            }
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                Err(e.to_string())
            }
        };
        reports.push(SourceReport {
            url: url.to_string(),
            result,
        });
    }

    (domains, reports)
}

/// Run a full update with the given fetcher, writing the result to `output`.
pub async fn run_with<F>(fetcher: &F, config: &Config, output: &Path) -> Result<RunSummary>
where
    F: ListFetcher + ?Sized,
{
    config.validate()?;

    let (domains, sources) = collect_domains(fetcher, config).await;

    if sources.iter().all(|s| s.result.is_err()) {
        error!("No source could be fetched; writing an empty list");
    }

    info!(
        "Writing {} unique domains to {:?}",
        group_digits(domains.len()),
        output
    );
    write_hosts_file(&domains, output)?;

    Ok(RunSummary {
        sources,
        total_domains: domains.len(),
        output: output.to_path_buf(),
    })
}

/// Run a full update over HTTP.
pub async fn run(config: &Config, output: &Path) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(config)?;
    run_with(&fetcher, config, output)
        .await
        .with_context(|| format!("Update of {:?} failed", output))
}

/// Print the per-source table and totals
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!(" SOURCE                                        DOMAINS      NEW");
    println!(" ──────────────────────────────────────────── ──────────── ────────────");

    for source in &summary.sources {
        match &source.result {
            Ok(stats) => println!(
                " {:<44} {:>12} {:>12}",
                display_url(&source.url, 44),
                group_digits(stats.valid),
                group_digits(stats.added),
            ),
            Err(_) => println!(" {:<44} {:>12} {:>12}", display_url(&source.url, 44), "FAILED", "-"),
        }
    }

    println!(" ──────────────────────────────────────────── ──────────── ────────────");
    println!();
    println!(
        "[OK] {} unique domains written to {} ({} of {} sources fetched)",
        group_digits(summary.total_domains),
        summary.output.display(),
        summary.succeeded(),
        summary.sources.len()
    );
}
