use super::{select_attr, select_text, selector, ListingSource, MISSING_FIELD};
use crate::types::{JobRecord, Result};
use scraper::Html;
use tracing::debug;
use url::Url;

const QUERY_URL: &str = "https://www.indeed.com/jobs?q=healthcare&l=";
const BASE_URL: &str = "https://www.indeed.com";

/// Indeed search results. Result cards are `div.job_seen_beacon`; the title
/// anchor carries a relative job URL that gets resolved against the site base.
pub struct IndeedSource;

impl IndeedSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IndeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSource for IndeedSource {
    fn name(&self) -> &str {
        "Indeed"
    }

    fn query_url(&self) -> &str {
        QUERY_URL
    }

    fn parse(&self, html: &str) -> Result<Vec<JobRecord>> {
        let document = Html::parse_document(html);
        let card_sel = selector("div.job_seen_beacon")?;
        let role_sel = selector("h2.jobTitle span")?;
        let link_sel = selector("h2.jobTitle a")?;
        let company_sel = selector("span[data-testid=\"company-name\"]")?;
        let location_sel = selector("div[data-testid=\"text-location\"]")?;
        let date_sel = selector("span.date")?;

        let base = Url::parse(BASE_URL).expect("static base URL");

        let mut records = Vec::new();
        for card in document.select(&card_sel) {
            let link = select_attr(card, &link_sel, "href")
                .and_then(|href| base.join(&href).ok().map(String::from))
                .unwrap_or_else(|| MISSING_FIELD.to_string());

            records.push(JobRecord {
                company: select_text(card, &company_sel)
                    .unwrap_or_else(|| self.name().to_string()),
                role: select_text(card, &role_sel)
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                location: select_text(card, &location_sel)
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                link,
                date_posted: select_text(card, &date_sel)
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
            });
        }

        debug!("Indeed page yielded {} cards", records.len());
        Ok(records)
    }
}
