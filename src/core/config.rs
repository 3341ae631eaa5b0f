use rand::seq::IndexedRandom;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const DEFAULT_LISTING_URL: &str = "https://food.grab.com/sg/en";
const DEFAULT_LOCATION: &str =
    "PT Singapore - Choa Chu Kang North 6, Singapore, 689577";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36 \
     Edge/17.17134";

/// Strategy that picks one proxy endpoint out of the configured pool, or
/// `None` to connect directly. Injected so callers can swap the policy
/// (round-robin, health-aware, fixed) without touching the browser code.
pub type ProxyPicker = Arc<dyn Fn(&[String]) -> Option<String> + Send + Sync>;

/// Uniform random choice over the pool; the default picker.
pub fn random_proxy(pool: &[String]) -> Option<String> {
    pool.choose(&mut rand::rng()).cloned()
}

#[derive(Clone)]
pub struct ScrapeConfig {
    pub listing_url: Url,
    pub location: String,
    pub user_agent: String,
    pub proxies: Vec<String>,
    pub proxy_picker: ProxyPicker,
    /// How long to wait for the cookie-consent dialog before giving up on it.
    pub cookie_timeout: Duration,
    /// How long to wait for a required element to appear in the DOM.
    pub element_timeout: Duration,
    /// Pause between scroll steps while waiting for lazy content.
    pub scroll_pause: Duration,
    /// Settling delay after the page height has stabilized.
    pub settle_delay: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_url: Url::parse(DEFAULT_LISTING_URL).expect("default URL is valid"),
            location: DEFAULT_LOCATION.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxies: Vec::new(),
            proxy_picker: Arc::new(random_proxy),
            cookie_timeout: Duration::from_secs(10),
            element_timeout: Duration::from_secs(20),
            scroll_pause: Duration::from_secs(2),
            settle_delay: Duration::from_secs(25),
        }
    }
}

impl ScrapeConfig {
    pub fn with_listing_url(mut self, url: Url) -> Self {
        self.listing_url = url;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_proxies(mut self, proxies: Vec<String>) -> Self {
        self.proxies = proxies;
        self
    }

    pub fn with_proxy_picker(mut self, picker: ProxyPicker) -> Self {
        self.proxy_picker = picker;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_scroll_pause(mut self, pause: Duration) -> Self {
        self.scroll_pause = pause;
        self
    }

    /// Runs the configured picker over the pool.
    pub fn pick_proxy(&self) -> Option<String> {
        (self.proxy_picker)(&self.proxies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_picks_no_proxy() {
        let config = ScrapeConfig::default();
        assert_eq!(config.pick_proxy(), None);
    }

    #[test]
    fn default_picker_picks_from_the_pool() {
        let pool = vec![
            "117.250.3.58:8080".to_string(),
            "35.185.196.38:3128".to_string(),
        ];
        let config = ScrapeConfig::default().with_proxies(pool.clone());
        let picked = config.pick_proxy().unwrap();
        assert!(pool.contains(&picked));
    }

    #[test]
    fn picker_strategy_is_injectable() {
        let config = ScrapeConfig::default()
            .with_proxies(vec!["a:1".to_string(), "b:2".to_string()])
            .with_proxy_picker(Arc::new(|pool| pool.first().cloned()));
        assert_eq!(config.pick_proxy().as_deref(), Some("a:1"));
    }
}
