use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ListingBatch, StorageBackend, StorageError, StoreOutcome};

/// Writes the batch as a tabular CSV file. Always rewritten from scratch,
/// even when a previous run left one behind.
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl StorageBackend for CsvStorage {
    async fn persist(&self, batch: &ListingBatch) -> Result<StoreOutcome, StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        for record in &batch.records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(StoreOutcome::Written(self.path.clone()))
    }
}
