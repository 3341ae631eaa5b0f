use scraper::Selector;
use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// Raw CSS selector strings for every structural marker the extractor relies
/// on, carrying a version label so a site-markup change is a table update
/// rather than a code change. The table round-trips through serde, so an
/// updated version can be loaded from JSON without touching the extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSpec {
    pub version: String,
    pub container: String,
    pub card: String,
    pub name: String,
    pub cuisine: String,
    pub stats: String,
    pub rating_star: String,
    pub delivery_clock: String,
    pub info_column: String,
    pub discount: String,
    pub promo_tag: String,
    pub image: String,
}

impl Default for SelectorSpec {
    /// Markup observed on the GrabFood listing page.
    fn default() -> Self {
        Self {
            version: "grabfood-v1".to_string(),
            container: "div.RestaurantListRow___1SbZY".to_string(),
            card: "div.ant-row-flex.ant-row-flex-start.ant-row-flex-top.asList___1ZNTr"
                .to_string(),
            name: "p.name___2epcT".to_string(),
            cuisine: "div.cuisine___T2tCh".to_string(),
            stats: "div.numbersChild___2qKMV".to_string(),
            rating_star: "div.ratingStar".to_string(),
            delivery_clock: "div.deliveryClock".to_string(),
            info_column: "div.colInfo___3iLqj".to_string(),
            discount: "div.discount___3h-0m".to_string(),
            promo_tag: "div.promoTagHead___1bjRG".to_string(),
            image: "img".to_string(),
        }
    }
}

/// A [`SelectorSpec`] with every selector parsed and ready for matching.
#[derive(Debug)]
pub struct SelectorTable {
    version: String,
    pub(crate) container: Selector,
    pub(crate) card: Selector,
    pub(crate) name: Selector,
    pub(crate) cuisine: Selector,
    pub(crate) stats: Selector,
    pub(crate) rating_star: Selector,
    pub(crate) delivery_clock: Selector,
    pub(crate) info_column: Selector,
    pub(crate) discount: Selector,
    pub(crate) promo_tag: Selector,
    pub(crate) image: Selector,
}

impl SelectorTable {
    pub fn compile(spec: &SelectorSpec) -> Result<Self, ExtractionError> {
        Ok(Self {
            version: spec.version.clone(),
            container: parse(&spec.container)?,
            card: parse(&spec.card)?,
            name: parse(&spec.name)?,
            cuisine: parse(&spec.cuisine)?,
            stats: parse(&spec.stats)?,
            rating_star: parse(&spec.rating_star)?,
            delivery_clock: parse(&spec.delivery_clock)?,
            info_column: parse(&spec.info_column)?,
            discount: parse(&spec.discount)?,
            promo_tag: parse(&spec.promo_tag)?,
            image: parse(&spec.image)?,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self::compile(&SelectorSpec::default()).expect("default selector table is valid")
    }
}

fn parse(css: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(css)
        .map_err(|e| ExtractionError::InvalidSelector(format!("{}: {}", css, e)))
}
