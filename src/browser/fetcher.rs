use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use crate::core::{ScrapeConfig, ScraperResult};

/// A listing page after all client-side rendering has settled.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub url: Url,
    pub html: String,
    pub fetched_at: DateTime<Utc>,
}

/// Produces a fully rendered listing page for the configured location.
/// Implementations own navigation, the cookie prompt, the location form and
/// lazy-load scrolling; callers receive a stable snapshot.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_listing(&self, config: &ScrapeConfig) -> ScraperResult<RenderedPage>;
}
