//! Menu items and categories.

use serde::{Deserialize, Serialize};

use super::id::MenuItemId;
use super::price::Price;
use super::rating::Rating;

/// A single dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Option<Price>,
    pub description: Option<String>,
    pub rating: Option<Rating>,
    /// Rating count as the API formats it (e.g. `"120 ratings"`).
    pub rating_count: Option<String>,
    /// Promotional ribbon text (e.g. `"Bestseller"`).
    pub ribbon: Option<String>,
    pub image_id: Option<String>,
}

impl MenuItem {
    /// A menu item with only an id and a name.
    #[must_use]
    pub fn new(id: impl Into<MenuItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: None,
            description: None,
            rating: None,
            rating_count: None,
            ribbon: None,
            image_id: None,
        }
    }
}

/// A titled group of menu items ("Recommended", "Desserts", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub title: String,
    pub items: Vec<MenuItem>,
}
