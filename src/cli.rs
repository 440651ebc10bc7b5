//! CLI argument parsing with clap.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "blocklist-updater")]
#[command(author, version, about = "Aggregate domain blocklists into a single hosts file")]
#[command(after_help = concat!(
    "Source lists are read from the BLOCKLIST_URLS environment variable ",
    "(whitespace-separated URLs). When unset, the StevenBlack unified hosts list is used."
))]
pub struct Cli {
    /// Path of the hosts file to write
    pub output: Option<PathBuf>,

    /// Per-source request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Number of sources fetched concurrently
    #[arg(short, long, default_value_t = DEFAULT_MAX_CONCURRENT, value_parser = parse_jobs)]
    pub jobs: usize,

    /// Quiet mode (for cron/CI jobs)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Usage line shown when the output path is missing
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    /// Build the run configuration from the environment plus CLI overrides
    pub fn to_config(&self) -> Config {
        let mut config = Config::from_env();
        config.timeout = Duration::from_secs(self.timeout);
        config.max_concurrent = self.jobs;
        config
    }
}

fn parse_jobs(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        Ok(_) => Err("must be at least 1".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["blocklist-updater"]).unwrap();
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_output_and_flags() {
        let cli = Cli::try_parse_from([
            "blocklist-updater",
            "--timeout",
            "10",
            "-j",
            "8",
            "/tmp/blocklist.hosts",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/blocklist.hosts")));
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.jobs, 8);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["blocklist-updater", "out.hosts"]).unwrap();
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cli.jobs, DEFAULT_MAX_CONCURRENT);
    }

    #[test]
    fn test_rejects_zero_values() {
        assert!(Cli::try_parse_from(["blocklist-updater", "--timeout", "0", "out"]).is_err());
        assert!(Cli::try_parse_from(["blocklist-updater", "--jobs", "0", "out"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["blocklist-updater", "-q", "-v", "out"]).is_err());
    }

    #[test]
    fn test_usage_mentions_output() {
        let usage = Cli::usage();
        assert!(usage.contains("blocklist-updater"));
        assert!(usage.contains("OUTPUT"));
    }
}
