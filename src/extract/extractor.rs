use log::debug;
use scraper::{ElementRef, Html};
use thiserror::Error;

use super::{RestaurantRecord, SelectorTable};

/// Delivery time and distance arrive as one text fragment, bullet-delimited.
const DELIVERY_SEPARATOR: char = '•';
/// Fixed-width truncation matching the known text patterns: "20 mins" is the
/// first 7 chars of the time segment, "1.2 km" the last 6 of the distance.
const DELIVERY_TIME_WIDTH: usize = 7;
const DISTANCE_WIDTH: usize = 6;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("page has no listing container")]
    NoContainer,
    #[error("listing container holds no restaurant cards")]
    EmptyListing,
    #[error("card {card} is missing required field '{field}'")]
    MissingRequiredField { field: &'static str, card: usize },
    #[error("card {card} has malformed delivery info: {text:?}")]
    MalformedDeliveryInfo { card: usize, text: String },
    #[error("invalid selector {0}")]
    InvalidSelector(String),
}

/// Turns a fully rendered listing page into restaurant records, one per card,
/// in document order. Pure over its input: no state survives a call, and the
/// same markup always yields the same records.
///
/// Required fields (name, image source) abort the whole batch when missing;
/// optional markers simply leave their field empty. See [`ExtractionError`]
/// for the full taxonomy.
pub struct ListingExtractor {
    selectors: SelectorTable,
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::new(SelectorTable::default())
    }
}

impl ListingExtractor {
    pub fn new(selectors: SelectorTable) -> Self {
        Self { selectors }
    }

    pub fn selector_version(&self) -> &str {
        self.selectors.version()
    }

    pub fn extract(&self, page: &str) -> Result<Vec<RestaurantRecord>, ExtractionError> {
        let document = Html::parse_document(page);

        let container = document
            .select(&self.selectors.container)
            .next()
            .ok_or(ExtractionError::NoContainer)?;

        let cards: Vec<ElementRef> = container.select(&self.selectors.card).collect();
        if cards.is_empty() {
            return Err(ExtractionError::EmptyListing);
        }
        debug!(
            "Found {} listing cards (selector table {})",
            cards.len(),
            self.selectors.version()
        );

        cards
            .into_iter()
            .enumerate()
            .map(|(index, card)| self.extract_card(card, index))
            .collect()
    }

    fn extract_card(
        &self,
        card: ElementRef,
        index: usize,
    ) -> Result<RestaurantRecord, ExtractionError> {
        let name = first_text(&card, &self.selectors.name).ok_or(
            ExtractionError::MissingRequiredField {
                field: "name",
                card: index,
            },
        )?;

        let cuisine = first_text(&card, &self.selectors.cuisine);
        let rating = self.rating(&card);
        let (delivery_time, distance) = self.delivery_info(&card, index)?;
        let discount = self.discount(&card);
        let promo = card.select(&self.selectors.promo_tag).next().is_some();

        let image_url = card
            .select(&self.selectors.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string)
            .ok_or(ExtractionError::MissingRequiredField {
                field: "image source",
                card: index,
            })?;

        Ok(RestaurantRecord {
            name,
            cuisine,
            rating,
            delivery_time,
            distance,
            discount,
            promo,
            image_url,
        })
    }

    /// The first stats fragment carries the rating, but only when the
    /// rating-star sub-marker confirms it; bare text in that slot is
    /// something else (e.g. a review count) and is not accepted.
    fn rating(&self, card: &ElementRef) -> Option<String> {
        let stats = card.select(&self.selectors.stats).next()?;
        if stats.select(&self.selectors.rating_star).next().is_some() {
            Some(text_of(&stats))
        } else {
            None
        }
    }

    /// Locates the stats fragment tagged with the clock icon and splits its
    /// `"<time> • <distance>"` text on the bullet. No clock fragment means
    /// the card ships without delivery info; a clock fragment whose text
    /// does not split into exactly two segments is malformed.
    fn delivery_info(
        &self,
        card: &ElementRef,
        index: usize,
    ) -> Result<(Option<String>, Option<String>), ExtractionError> {
        let tagged = card.select(&self.selectors.stats).find(|stats| {
            stats.select(&self.selectors.delivery_clock).next().is_some()
        });
        let Some(fragment) = tagged else {
            return Ok((None, None));
        };

        let text = text_of(&fragment);
        let segments: Vec<&str> = text.split(DELIVERY_SEPARATOR).collect();
        let [time, distance] = segments[..] else {
            return Err(ExtractionError::MalformedDeliveryInfo {
                card: index,
                text,
            });
        };

        Ok((
            Some(prefix_chars(time, DELIVERY_TIME_WIDTH)),
            Some(suffix_chars(distance, DISTANCE_WIDTH)),
        ))
    }

    fn discount(&self, card: &ElementRef) -> Option<String> {
        let info_column = card.select(&self.selectors.info_column).next()?;
        info_column
            .select(&self.selectors.discount)
            .next()
            .map(|el| text_of(&el))
    }
}

fn first_text(card: &ElementRef, selector: &scraper::Selector) -> Option<String> {
    card.select(selector).next().map(|el| text_of(&el))
}

fn text_of(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn prefix_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn suffix_chars(s: &str, n: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(n)).collect()
}
