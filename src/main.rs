//! Main entry point for the cninfo filing downloader CLI

use clap::Parser;
use cninfo_filing_downloader::cli::Cli;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cninfo_filing_downloader=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    // Per-category and per-file failures are reported inside the run and
    // still end in a normal exit; only setup failures reach this point.
    if let Err(e) = cli.execute().await.map_err(anyhow::Error::from) {
        error!("Run aborted: {:#}", e);
        std::process::exit(1);
    }
}
