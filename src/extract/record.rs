use serde::{Deserialize, Serialize};

/// One restaurant as it appears on the listing page. Field names serialize
/// under the column headers shared by both output sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    #[serde(rename = "Restaurant Name")]
    pub name: String,
    #[serde(rename = "Restaurant Cuisine")]
    pub cuisine: Option<String>,
    #[serde(rename = "Restaurant Rating")]
    pub rating: Option<String>,
    #[serde(rename = "Restaurant Delivery Time")]
    pub delivery_time: Option<String>,
    #[serde(rename = "Restaurant Distance")]
    pub distance: Option<String>,
    #[serde(rename = "Discount")]
    pub discount: Option<String>,
    #[serde(rename = "Promo")]
    pub promo: bool,
    #[serde(rename = "Images")]
    pub image_url: String,
}
