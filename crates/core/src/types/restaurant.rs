//! Restaurant listing entries and detail pages.

use serde::{Deserialize, Serialize};

use super::id::{MenuItemId, RestaurantId};
use super::menu::{MenuCategory, MenuItem};
use super::rating::Rating;

/// A restaurant as it appears in the location listing.
///
/// Every field besides the id is optional: the listing API omits fields
/// freely and a missing value is rendered as a placeholder, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: Option<String>,
    pub cuisines: Vec<String>,
    pub avg_rating: Option<Rating>,
    /// Rating as the API formats it (e.g. `"4.3"` or `"--"`).
    pub avg_rating_text: Option<String>,
    pub delivery_time_minutes: Option<u32>,
    /// CDN image id, joined onto the configured CDN base URL.
    pub image_id: Option<String>,
    pub area_name: Option<String>,
    pub cost_for_two: Option<String>,
}

impl Restaurant {
    /// A listing entry with only an id.
    #[must_use]
    pub fn new(id: impl Into<RestaurantId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            cuisines: Vec::new(),
            avg_rating: None,
            avg_rating_text: None,
            delivery_time_minutes: None,
            image_id: None,
            area_name: None,
            cost_for_two: None,
        }
    }

    /// Rating text for display, preferring the API's own formatting.
    #[must_use]
    pub fn rating_label(&self) -> Option<String> {
        self.avg_rating_text
            .clone()
            .or_else(|| self.avg_rating.map(|r| r.to_string()))
    }
}

/// A restaurant's menu page: header info plus categorized items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetails {
    pub id: RestaurantId,
    pub name: Option<String>,
    pub avg_rating: Option<Rating>,
    pub total_ratings: Option<String>,
    pub cost_for_two_message: Option<String>,
    pub cuisines: Vec<String>,
    pub sla: Option<String>,
    pub fee_message: Option<String>,
    pub categories: Vec<MenuCategory>,
}

impl RestaurantDetails {
    /// Find a menu item by id across all categories.
    #[must_use]
    pub fn find_item(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| &item.id == id)
    }

    /// Total number of items across all categories.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}
