mod config;
mod errors;
mod pipeline;

pub use config::{random_proxy, ProxyPicker, ScrapeConfig};
pub use errors::{ScraperError, ScraperResult};
pub use pipeline::Pipeline;
