use crate::fetcher::Fetcher;
use crate::types::{JobRecord, JobwatchError, Result};
use async_trait::async_trait;
use scraper::{ElementRef, Selector};

pub mod indeed;
pub mod linkedin;
pub mod ziprecruiter;

pub use indeed::IndeedSource;
pub use linkedin::LinkedInSource;
pub use ziprecruiter::ZipRecruiterSource;

/// Substitute for any field a listing card does not carry.
pub const MISSING_FIELD: &str = "N/A";

/// One job listing site.
///
/// Each implementation owns a fixed query URL and the selector table for one
/// snapshot of that site's markup. Site markup changes are expected to break
/// `parse`; that fragility stays behind this boundary. Implementations share
/// no mutable state, so sources can be fetched concurrently.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Site label, used in logs and as the company-field default.
    fn name(&self) -> &str;

    /// The fixed search URL this source scrapes.
    fn query_url(&self) -> &str;

    /// Extracts job records from one page of the site's markup. A card
    /// missing a field yields a default value, never an error; an error here
    /// means the page structure itself was unusable.
    fn parse(&self, html: &str) -> Result<Vec<JobRecord>>;

    /// Fetches the query URL once and parses the response body.
    async fn fetch(&self, fetcher: &Fetcher) -> Result<Vec<JobRecord>> {
        let body = fetcher.get(self.query_url()).await?;
        self.parse(&body)
    }
}

/// The sites scraped by a default run.
pub fn default_sources() -> Vec<Box<dyn ListingSource>> {
    vec![
        Box::new(IndeedSource::new()),
        Box::new(LinkedInSource::new()),
        Box::new(ZipRecruiterSource::new()),
    ]
}

/// Compiles a CSS selector, surfacing a bad selector string as a parse error.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| JobwatchError::Parse(format!("bad selector {css:?}: {e}")))
}

/// Collected, whitespace-trimmed text of the first match under `element`,
/// or `None` when the selector matches nothing or only whitespace.
pub(crate) fn select_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let node = element.select(selector).next()?;
    let text = node.text().collect::<String>();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Value of `attr` on the first match under `element`.
pub(crate) fn select_attr(
    element: ElementRef<'_>,
    selector: &Selector,
    attr: &str,
) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|node| node.value().attr(attr))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
