use clap::Parser;
use jobwatch::{run_once, Config};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Collect job postings for the configured query, merge them into the
/// accumulated dataset and email a digest of anything new.
#[derive(Parser, Debug)]
#[command(name = "jobwatch", version)]
struct Cli {
    /// Path of the CSV dataset (overrides JOBWATCH_DATA_FILE)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Skip the email digest even when SMTP settings are present
    #[arg(long)]
    no_email: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    if cli.no_email {
        config.email = None;
    }

    info!("Starting jobwatch run, dataset at {}", config.data_file.display());

    let summary = run_once(&config).await?;

    info!(
        "Run complete: {} fetched, {} new, {} total, digest sent: {}",
        summary.fetched, summary.new_records, summary.total_records, summary.notified
    );
    Ok(())
}
