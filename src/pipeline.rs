use crate::aggregator::{aggregate, fetch_all};
use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::notifier::Notifier;
use crate::reconciler::reconcile;
use crate::sources::{default_sources, ListingSource};
use crate::store::CsvStore;
use crate::types::Result;
use tracing::{info, warn};

/// Outcome of one pipeline pass, for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Candidate records fetched across all sources, before deduplication.
    pub fetched: usize,
    /// Postings not present in the dataset before this run.
    pub new_records: usize,
    /// Dataset size after the merge.
    pub total_records: usize,
    /// Whether a digest email went out.
    pub notified: bool,
}

/// Runs the whole batch once against the default source list.
pub async fn run_once(config: &Config) -> Result<RunSummary> {
    run_once_with_sources(config, default_sources()).await
}

/// Load, fetch, aggregate, reconcile, save, notify. One linear pass; any
/// stage error aborts the run before the next stage, so a failed fetch never
/// touches the durable file and a failed save never triggers a digest.
pub async fn run_once_with_sources(
    config: &Config,
    sources: Vec<Box<dyn ListingSource>>,
) -> Result<RunSummary> {
    let store = CsvStore::new(&config.data_file);
    let existing = store.load()?;

    let fetcher = Fetcher::new(&config.user_agent, config.timeout_seconds)?;
    let batches = fetch_all(&sources, &fetcher).await?;
    let candidates = aggregate(batches);
    info!("Aggregated {} candidate postings", candidates.len());

    let (merged, new_ones) = reconcile(&existing, &candidates);
    info!(
        "{} new postings, dataset now holds {}",
        new_ones.len(),
        merged.len()
    );

    store.save(&merged)?;

    let mut notified = false;
    if new_ones.is_empty() {
        info!("Nothing new, no digest to send");
    } else {
        match &config.email {
            Some(email) => {
                Notifier::new(email.clone()).notify(&new_ones).await?;
                notified = true;
            }
            None => warn!(
                "{} new postings found but email is not configured, skipping digest",
                new_ones.len()
            ),
        }
    }

    Ok(RunSummary {
        fetched: candidates.len(),
        new_records: new_ones.len(),
        total_records: merged.len(),
        notified,
    })
}
