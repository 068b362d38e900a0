//! Core types for Food Villa.
//!
//! This module provides type-safe wrappers for the restaurant domain.

pub mod cart;
pub mod id;
pub mod menu;
pub mod price;
pub mod rating;
pub mod restaurant;

pub use cart::CartLine;
pub use id::*;
pub use menu::{MenuCategory, MenuItem};
pub use price::{CurrencyCode, Price};
pub use rating::{Rating, RatingError};
pub use restaurant::{Restaurant, RestaurantDetails};
