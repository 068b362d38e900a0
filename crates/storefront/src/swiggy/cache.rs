//! Cache types for restaurant API responses.

use std::sync::Arc;

use food_villa_core::{Restaurant, RestaurantDetails, RestaurantId};

/// Cache key for listings and menus.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Listing,
    Menu(RestaurantId),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Listing(Arc<Vec<Restaurant>>),
    Menu(Arc<RestaurantDetails>),
}
