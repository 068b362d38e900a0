//! Cart line items.

use serde::{Deserialize, Serialize};

use super::id::RestaurantId;
use super::menu::MenuItem;
use super::price::Price;

/// One unit of a menu item in the cart.
///
/// Quantity is implicit: adding the same dish twice yields two lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub restaurant_id: RestaurantId,
    pub item: MenuItem,
}

impl CartLine {
    /// Create a cart line.
    #[must_use]
    pub const fn new(restaurant_id: RestaurantId, item: MenuItem) -> Self {
        Self {
            restaurant_id,
            item,
        }
    }

    /// Price of this line; unpriced items count as zero.
    #[must_use]
    pub fn price(&self) -> Price {
        self.item.price.unwrap_or(Price::inr(0))
    }
}
