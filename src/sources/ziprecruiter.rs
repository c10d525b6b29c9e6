use super::{select_attr, select_text, selector, ListingSource, MISSING_FIELD};
use crate::types::{JobRecord, Result};
use scraper::Html;
use tracing::debug;

const QUERY_URL: &str = "https://www.ziprecruiter.com/jobs-search?search=healthcare&location=";

/// ZipRecruiter search results, `article.job_result` per card.
pub struct ZipRecruiterSource;

impl ZipRecruiterSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZipRecruiterSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSource for ZipRecruiterSource {
    fn name(&self) -> &str {
        "ZipRecruiter"
    }

    fn query_url(&self) -> &str {
        QUERY_URL
    }

    fn parse(&self, html: &str) -> Result<Vec<JobRecord>> {
        let document = Html::parse_document(html);
        let card_sel = selector("article.job_result")?;
        let link_sel = selector("a.job_link")?;
        let company_sel = selector("a.t_org_link")?;
        let location_sel = selector("a.t_location_link")?;
        let date_sel = selector("time")?;

        let mut records = Vec::new();
        for card in document.select(&card_sel) {
            records.push(JobRecord {
                company: select_text(card, &company_sel)
                    .unwrap_or_else(|| self.name().to_string()),
                role: select_text(card, &link_sel)
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                location: select_text(card, &location_sel)
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                link: select_attr(card, &link_sel, "href")
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                date_posted: select_text(card, &date_sel)
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
            });
        }

        debug!("ZipRecruiter page yielded {} cards", records.len());
        Ok(records)
    }
}
