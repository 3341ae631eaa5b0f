use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::{Element, Page};
use chrono::Utc;
use futures::StreamExt;
use log::{debug, info};
use std::time::{Duration, Instant};
use tokio::time::sleep;

use super::{PageFetcher, RenderedPage};
use crate::core::{ScrapeConfig, ScraperError, ScraperResult};

const LAYOUT_SELECTOR: &str = ".ant-layout";
const LOCATION_INPUT_SELECTOR: &str = "#location-input";
const SUBMIT_BUTTON_SELECTOR: &str = ".ant-btn.submitBtn___2roqB.ant-btn-primary";
const CONTAINER_SELECTOR: &str = ".RestaurantListRow___1SbZY";

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Clicks the first button whose text contains "Accept"; evaluates to
/// whether anything was clicked.
const ACCEPT_COOKIES_JS: &str = "Array.from(document.querySelectorAll('button'))\
     .some(function (b) { if (b.textContent.includes('Accept')) { b.click(); return true; } return false; })";

const CLEAR_LOCATION_JS: &str =
    "document.getElementById('location-input') && (document.getElementById('location-input').value = '')";

/// Drives headless Chrome through the full rendering sequence: spoofed
/// identity, cookie prompt, location form, scroll-until-stable, settle
/// delay, snapshot.
#[derive(Debug, Default)]
pub struct ChromeFetcher;

impl ChromeFetcher {
    pub fn new() -> Self {
        Self
    }

    async fn launch(&self, config: &ScrapeConfig) -> ScraperResult<(Browser, tokio::task::JoinHandle<()>)> {
        let mut builder = BrowserConfig::builder()
            .arg(format!("--user-agent={}", config.user_agent))
            .arg("--incognito")
            .arg("--disable-blink-features=AutomationControlled");

        if let Some(proxy) = config.pick_proxy() {
            info!("Routing browser traffic through proxy {}", proxy);
            builder = builder.arg(format!("--proxy-server={}", proxy));
        }

        let browser_config = builder.build().map_err(ScraperError::Browser)?;
        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // The handler stream must be polled for any CDP command to complete.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        Ok((browser, handler_task))
    }

    /// Best-effort: polls for the consent button until the timeout and moves
    /// on either way. A missing prompt is the common case in incognito.
    async fn accept_cookies(&self, page: &Page, timeout: Duration) {
        let attempt = tokio::time::timeout(timeout, async {
            loop {
                let clicked = page
                    .evaluate(ACCEPT_COOKIES_JS)
                    .await
                    .ok()
                    .and_then(|result| result.into_value::<bool>().ok())
                    .unwrap_or(false);
                if clicked {
                    return;
                }
                sleep(POLL_INTERVAL).await;
            }
        })
        .await;

        match attempt {
            Ok(()) => debug!("Cookie prompt dismissed"),
            Err(_) => debug!("No cookie prompt within {:?}, continuing", timeout),
        }
    }

    async fn enter_location(&self, page: &Page, config: &ScrapeConfig) -> ScraperResult<()> {
        wait_for_element(page, LAYOUT_SELECTOR, config.element_timeout).await?;

        let input =
            wait_for_element(page, LOCATION_INPUT_SELECTOR, config.element_timeout).await?;
        input.click().await?;
        sleep(Duration::from_secs(2)).await;
        page.evaluate(CLEAR_LOCATION_JS).await?;
        input.type_str(&config.location).await?;

        let submit =
            wait_for_element(page, SUBMIT_BUTTON_SELECTOR, config.element_timeout).await?;
        submit.click().await?;
        info!("Submitted location query: {}", config.location);

        // Results layout re-mounts after submission.
        wait_for_element(page, LAYOUT_SELECTOR, config.element_timeout).await?;
        Ok(())
    }

    /// Scrolls to the bottom until the page height stops growing, forcing
    /// every lazily loaded card to render.
    async fn scroll_to_end(&self, page: &Page, pause: Duration) -> ScraperResult<()> {
        let mut last_height = body_height(page).await?;
        loop {
            page.evaluate("window.scrollTo(0, document.body.scrollHeight)")
                .await?;
            sleep(pause).await;

            let new_height = body_height(page).await?;
            debug!("Scrolled: page height {} -> {}", last_height, new_height);
            if new_height == last_height {
                break;
            }
            last_height = new_height;
        }
        Ok(())
    }
}

#[async_trait]
impl PageFetcher for ChromeFetcher {
    async fn fetch_listing(&self, config: &ScrapeConfig) -> ScraperResult<RenderedPage> {
        let (mut browser, handler_task) = self.launch(config).await?;

        let result = async {
            let page = browser.new_page(config.listing_url.as_str()).await?;
            page.wait_for_navigation().await?;

            self.accept_cookies(&page, config.cookie_timeout).await;
            self.enter_location(&page, config).await?;
            self.scroll_to_end(&page, config.scroll_pause).await?;

            // Let the last batch of cards finish rendering.
            sleep(config.settle_delay).await;
            wait_for_element(&page, CONTAINER_SELECTOR, config.element_timeout).await?;

            let html = page.content().await?;
            Ok(RenderedPage {
                url: config.listing_url.clone(),
                html,
                fetched_at: Utc::now(),
            })
        }
        .await;

        if let Err(e) = browser.close().await {
            debug!("Browser close failed: {}", e);
        }
        let _ = browser.wait().await;
        handler_task.abort();

        result
    }
}

async fn wait_for_element(
    page: &Page,
    selector: &str,
    timeout: Duration,
) -> ScraperResult<Element> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(element) = page.find_element(selector).await {
            return Ok(element);
        }
        if Instant::now() >= deadline {
            return Err(ScraperError::Browser(format!(
                "timed out after {:?} waiting for '{}'",
                timeout, selector
            )));
        }
        sleep(POLL_INTERVAL).await;
    }
}

async fn body_height(page: &Page) -> ScraperResult<i64> {
    let height = page
        .evaluate("document.body.scrollHeight")
        .await?
        .into_value::<i64>()?;
    Ok(height)
}
