use log::info;

use super::{ListingBatch, StorageBackend, StorageError, StoreOutcome};

/// Routes a batch through every registered sink in registration order.
#[derive(Default)]
pub struct StorageManager {
    sinks: Vec<(String, Box<dyn StorageBackend>)>,
}

impl StorageManager {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn register_storage(
        mut self,
        name: impl Into<String>,
        sink: Box<dyn StorageBackend>,
    ) -> Self {
        self.sinks.push((name.into(), sink));
        self
    }

    pub async fn persist_all(&self, batch: &ListingBatch) -> Result<(), StorageError> {
        for (name, sink) in &self.sinks {
            match sink.persist(batch).await? {
                StoreOutcome::Written(path) => {
                    info!("[{}] Data saved to {}", name, path.display());
                }
                StoreOutcome::SkippedExisting(path) => {
                    info!("[{}] Skipped existing archive {}", name, path.display());
                }
            }
        }
        Ok(())
    }
}
