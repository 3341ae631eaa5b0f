mod archive;
mod base;
mod csv_file;
mod manager;

pub use archive::GzipNdjsonStorage;
pub use base::{ListingBatch, StorageBackend, StorageError, StoreOutcome};
pub use csv_file::CsvStorage;
pub use manager::StorageManager;
