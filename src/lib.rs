pub mod browser;
pub mod core;
pub mod extract;
pub mod storage;

pub use crate::browser::{ChromeFetcher, MockFetcher, PageFetcher, RenderedPage};
pub use crate::core::{Pipeline, ProxyPicker, ScrapeConfig, ScraperError, ScraperResult};
pub use crate::extract::{
    ExtractionError, ListingExtractor, RestaurantRecord, SelectorSpec, SelectorTable,
};
pub use crate::storage::{CsvStorage, GzipNdjsonStorage, StorageManager};
