use crate::types::{Dataset, JobRecord, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Durable CSV copy of the accumulated dataset.
///
/// The file is read in full at the start of a run and fully rewritten at the
/// end, so it always holds the latest deduplicated union with the fixed
/// header `Company,Role,Location,Link,Date Posted`.
///
/// Known limitation: nothing locks the file, so overlapping invocations
/// could lose updates between one run's load and another's save. This tool
/// assumes a single invocation at a time.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted dataset, or an empty one when the file does not
    /// exist yet (first run). Rows are deduplicated first-seen-wins on load,
    /// so a hand-edited file cannot break the one-record-per-link invariant.
    pub fn load(&self) -> Result<Dataset> {
        if !self.path.exists() {
            debug!("No dataset at {}, starting empty", self.path.display());
            return Ok(Dataset::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut dataset = Dataset::new();
        for row in reader.deserialize() {
            let record: JobRecord = row?;
            dataset.insert(record);
        }
        info!(
            "Loaded {} postings from {}",
            dataset.len(),
            self.path.display()
        );
        Ok(dataset)
    }

    /// Overwrites the durable file with the full dataset. Not an append: the
    /// file reflects exactly the dataset passed in.
    pub fn save(&self, dataset: &Dataset) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for record in dataset {
            writer.serialize(record)?;
        }
        writer.flush()?;
        info!(
            "Saved {} postings to {}",
            dataset.len(),
            self.path.display()
        );
        Ok(())
    }
}
