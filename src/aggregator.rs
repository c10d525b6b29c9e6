use crate::fetcher::Fetcher;
use crate::sources::ListingSource;
use crate::types::{JobRecord, Result};
use futures::future::try_join_all;
use tracing::info;

/// Fetches every source concurrently, one task per source, joined before
/// aggregation. Output order follows source registration order, not
/// completion order, so a run is deterministic. The first source error
/// aborts the whole fetch; there is no partial-result mode.
pub async fn fetch_all(
    sources: &[Box<dyn ListingSource>],
    fetcher: &Fetcher,
) -> Result<Vec<Vec<JobRecord>>> {
    let batches = try_join_all(sources.iter().map(|source| source.fetch(fetcher))).await?;
    for (source, batch) in sources.iter().zip(&batches) {
        info!("Pulled {} postings from {}", batch.len(), source.name());
    }
    Ok(batches)
}

/// Concatenates per-source batches, preserving source order and the record
/// order within each batch. Deduplication is the reconciler's job, not ours.
pub fn aggregate(batches: Vec<Vec<JobRecord>>) -> Vec<JobRecord> {
    batches.into_iter().flatten().collect()
}
