//! blocklist-updater - Domain Blocklist Aggregator
//!
//! Fetches third-party block lists and writes one sorted hosts file.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use blocklist_updater::cli::Cli;
use blocklist_updater::update;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing output path is a usage error: nothing is fetched
    let Some(output) = cli.output.clone() else {
        eprintln!("error: missing output path\n\n{}", Cli::usage());
        std::process::exit(1);
    };

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.to_config();
    let summary = update::run(&config, &output).await?;

    if !cli.quiet {
        update::print_summary(&summary);
    }

    Ok(())
}
