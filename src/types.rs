use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One job posting as extracted from a listing site.
///
/// The `link` field is the natural key: two records describe the same posting
/// if and only if their links are byte-for-byte equal. Every other field is
/// informational. Serde renames pin the CSV header to the column names prior
/// runs have written, so the durable file stays interoperable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Date Posted")]
    pub date_posted: String,
}

/// Insertion-ordered collection of job records with at most one record per link.
///
/// Inserts are first-seen-wins: once a link is present, later records with the
/// same link are discarded and never displace the stored field values.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<JobRecord>,
    links: HashSet<String>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from records in order, dropping duplicate links.
    pub fn from_records(records: impl IntoIterator<Item = JobRecord>) -> Self {
        let mut dataset = Self::new();
        for record in records {
            dataset.insert(record);
        }
        dataset
    }

    /// Inserts a record unless its link is already present.
    /// Returns whether the record was admitted.
    pub fn insert(&mut self, record: JobRecord) -> bool {
        if self.links.contains(&record.link) {
            return false;
        }
        self.links.insert(record.link.clone());
        self.records.push(record);
        true
    }

    pub fn contains_link(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobRecord> {
        self.records.iter()
    }

    /// The records in insertion order.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a JobRecord;
    type IntoIter = std::slice::Iter<'a, JobRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobwatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected page structure: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("mail build error: {0}")]
    Mail(#[from] lettre::error::Error),

    #[error("task join error: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, JobwatchError>;
