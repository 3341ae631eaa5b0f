use async_trait::async_trait;
use chrono::Utc;

use super::{PageFetcher, RenderedPage};
use crate::core::{ScrapeConfig, ScraperResult};

/// Fetcher that serves a canned page body, skipping the browser entirely.
/// Lets pipeline tests run against fixture markup.
#[derive(Debug, Clone)]
pub struct MockFetcher {
    html: String,
}

impl MockFetcher {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch_listing(&self, config: &ScrapeConfig) -> ScraperResult<RenderedPage> {
        Ok(RenderedPage {
            url: config.listing_url.clone(),
            html: self.html.clone(),
            fetched_at: Utc::now(),
        })
    }
}
