use super::{select_attr, select_text, selector, ListingSource, MISSING_FIELD};
use crate::types::{JobRecord, Result};
use scraper::Html;
use tracing::debug;

const QUERY_URL: &str = "https://www.linkedin.com/jobs/search?keywords=healthcare";

/// LinkedIn public job search (the logged-out listing page). Cards are
/// `div.base-card` and carry absolute job URLs on the full-card anchor.
pub struct LinkedInSource;

impl LinkedInSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinkedInSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSource for LinkedInSource {
    fn name(&self) -> &str {
        "LinkedIn"
    }

    fn query_url(&self) -> &str {
        QUERY_URL
    }

    fn parse(&self, html: &str) -> Result<Vec<JobRecord>> {
        let document = Html::parse_document(html);
        let card_sel = selector("div.base-card")?;
        let role_sel = selector("h3.base-search-card__title")?;
        let company_sel = selector("h4.base-search-card__subtitle")?;
        let location_sel = selector("span.job-search-card__location")?;
        let link_sel = selector("a.base-card__full-link")?;
        let date_sel = selector("time")?;

        let mut records = Vec::new();
        for card in document.select(&card_sel) {
            records.push(JobRecord {
                company: select_text(card, &company_sel)
                    .unwrap_or_else(|| self.name().to_string()),
                role: select_text(card, &role_sel)
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                location: select_text(card, &location_sel)
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                link: select_attr(card, &link_sel, "href")
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                date_posted: select_text(card, &date_sel)
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
            });
        }

        debug!("LinkedIn page yielded {} cards", records.len());
        Ok(records)
    }
}
