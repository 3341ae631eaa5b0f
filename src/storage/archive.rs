use async_trait::async_trait;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::warn;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{ListingBatch, StorageBackend, StorageError, StoreOutcome};

/// Writes the batch as gzip-compressed newline-delimited JSON. The archive is
/// write-once: an existing file at the path means a previous run already
/// captured this dataset, so it is left byte-for-byte untouched.
pub struct GzipNdjsonStorage {
    path: PathBuf,
}

impl GzipNdjsonStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl StorageBackend for GzipNdjsonStorage {
    async fn persist(&self, batch: &ListingBatch) -> Result<StoreOutcome, StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!(
                    "Archive '{}' already exists, data not saved",
                    self.path.display()
                );
                return Ok(StoreOutcome::SkippedExisting(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut encoder = GzEncoder::new(file, Compression::default());
        for record in &batch.records {
            serde_json::to_writer(&mut encoder, record)?;
            encoder.write_all(b"\n")?;
        }
        encoder.finish()?;

        Ok(StoreOutcome::Written(self.path.clone()))
    }
}
