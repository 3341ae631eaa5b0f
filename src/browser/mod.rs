mod chrome;
mod fetcher;
mod mock;

pub use chrome::ChromeFetcher;
pub use fetcher::{PageFetcher, RenderedPage};
pub use mock::MockFetcher;
