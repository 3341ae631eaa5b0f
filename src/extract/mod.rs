mod extractor;
mod record;
mod selectors;

pub use extractor::{ExtractionError, ListingExtractor};
pub use record::RestaurantRecord;
pub use selectors::{SelectorSpec, SelectorTable};
