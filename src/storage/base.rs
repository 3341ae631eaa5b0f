use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

use crate::extract::RestaurantRecord;

/// One extraction run's worth of records, tagged with its source.
#[derive(Debug, Clone)]
pub struct ListingBatch {
    pub url: Url,
    pub fetched_at: DateTime<Utc>,
    pub records: Vec<RestaurantRecord>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// What a sink did with the batch. Skipping is a legal outcome, not an
/// error: the gzip archive treats an existing file as already done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    Written(PathBuf),
    SkippedExisting(PathBuf),
}

#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn persist(&self, batch: &ListingBatch) -> Result<StoreOutcome, StorageError>;
}
