use crate::types::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Thin wrapper around a shared HTTP client.
///
/// One GET per page, bounded by the configured timeout. There is deliberately
/// no retry, backoff or partial-result path: a failed fetch fails the run.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(user_agent: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches a page body, failing on any transport error or non-success
    /// HTTP status.
    pub async fn get(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        info!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
