use log::{debug, info};

use crate::browser::PageFetcher;
use crate::core::{ScrapeConfig, ScraperResult};
use crate::extract::{ListingExtractor, RestaurantRecord};
use crate::storage::{ListingBatch, StorageManager};

/// End-to-end run: render the listing page, extract the records, persist
/// them through every registered sink. Synchronization between rendering and
/// extraction is handled here; the extractor only ever sees a settled
/// snapshot.
pub struct Pipeline {
    fetcher: Box<dyn PageFetcher>,
    extractor: ListingExtractor,
    storage: StorageManager,
}

impl Pipeline {
    pub fn new(
        fetcher: Box<dyn PageFetcher>,
        extractor: ListingExtractor,
        storage: StorageManager,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            storage,
        }
    }

    pub async fn run(&self, config: &ScrapeConfig) -> ScraperResult<Vec<RestaurantRecord>> {
        info!(
            "Scraping {} for location: {}",
            config.listing_url, config.location
        );

        let page = self.fetcher.fetch_listing(config).await?;
        debug!(
            "Rendered page is {} bytes (fetched at {})",
            page.html.len(),
            page.fetched_at
        );

        let records = self.extractor.extract(&page.html)?;
        info!(
            "Extracted {} restaurants (selector table {})",
            records.len(),
            self.extractor.selector_version()
        );

        let batch = ListingBatch {
            url: page.url,
            fetched_at: page.fetched_at,
            records,
        };
        self.storage.persist_all(&batch).await?;

        Ok(batch.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::MockFetcher;
    use crate::extract::ExtractionError;
    use crate::storage::{CsvStorage, GzipNdjsonStorage};
    use crate::ScraperError;

    const LISTING_PAGE: &str = r#"<html><body>
        <div class="RestaurantListRow___1SbZY">
          <div class="ant-row-flex ant-row-flex-start ant-row-flex-top asList___1ZNTr">
            <p class="name___2epcT">Hawker Delight</p>
            <div class="cuisine___T2tCh">Local</div>
            <div class="numbersChild___2qKMV"><div class="ratingStar"></div>4.7</div>
            <div class="numbersChild___2qKMV"><div class="deliveryClock"></div>20 mins•1.2 km</div>
            <div class="colInfo___3iLqj"></div>
            <img src="https://img.example.com/hawker.jpg">
          </div>
          <div class="ant-row-flex ant-row-flex-start ant-row-flex-top asList___1ZNTr">
            <p class="name___2epcT">Satay Corner</p>
            <div class="colInfo___3iLqj"></div>
            <div class="promoTagHead___1bjRG"></div>
            <img src="https://img.example.com/satay.jpg">
          </div>
        </div>
    </body></html>"#;

    fn pipeline_for(html: &str, dir: &std::path::Path) -> Pipeline {
        let storage = StorageManager::new()
            .register_storage("csv", Box::new(CsvStorage::new(dir.join("data.csv"))))
            .register_storage(
                "archive",
                Box::new(GzipNdjsonStorage::new(dir.join("data.ndjson.gz"))),
            );
        Pipeline::new(
            Box::new(MockFetcher::new(html)),
            ListingExtractor::default(),
            storage,
        )
    }

    #[tokio::test]
    async fn full_run_extracts_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline_for(LISTING_PAGE, dir.path());

        let records = pipeline.run(&ScrapeConfig::default()).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Hawker Delight");
        assert_eq!(records[0].delivery_time.as_deref(), Some("20 mins"));
        assert_eq!(records[0].distance.as_deref(), Some("1.2 km"));
        assert!(records[1].promo);
        assert!(dir.path().join("data.csv").exists());
        assert!(dir.path().join("data.ndjson.gz").exists());
    }

    #[tokio::test]
    async fn extraction_failure_surfaces_and_skips_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline_for("<html><body></body></html>", dir.path());

        let err = pipeline.run(&ScrapeConfig::default()).await.unwrap_err();

        assert!(matches!(
            err,
            ScraperError::Extraction(ExtractionError::NoContainer)
        ));
        assert!(!dir.path().join("data.csv").exists());
    }
}
