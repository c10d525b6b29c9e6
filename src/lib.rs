pub mod aggregator;
pub mod config;
pub mod fetcher;
pub mod notifier;
pub mod pipeline;
pub mod reconciler;
pub mod sources;
pub mod store;
pub mod types;

pub use aggregator::{aggregate, fetch_all};
pub use config::{Config, EmailConfig};
pub use fetcher::Fetcher;
pub use notifier::{build_digest, Notifier};
pub use pipeline::{run_once, run_once_with_sources, RunSummary};
pub use reconciler::reconcile;
pub use sources::{default_sources, ListingSource};
pub use store::CsvStore;
pub use types::{Dataset, JobRecord, JobwatchError, Result};
