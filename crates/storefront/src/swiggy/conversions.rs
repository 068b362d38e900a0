//! Conversions from raw API payloads to core types.
//!
//! Card positions shift between API versions, so sections are located by
//! shape (the first card carrying a given path) rather than by index. Every
//! leaf is read through a JSON pointer; anything missing becomes `None`.

use food_villa_core::{
    MenuCategory, MenuItem, MenuItemId, Price, Rating, Restaurant, RestaurantDetails,
    RestaurantId,
};
use serde_json::Value;
use tracing::debug;

use super::SwiggyError;

const RESTAURANT_GRID: &str = "/card/card/gridElements/infoWithStyle/restaurants";
const MENU_TITLE: &str = "/card/card/text";
const MENU_INFO: &str = "/card/card/info";
const MENU_REGULAR_CARDS: &str = "/groupedCard/cardGroupMap/REGULAR/cards";
const ITEM_CATEGORY_SUFFIX: &str = "ItemCategory";

/// Placeholder name for menu items the API sent without one.
pub const UNNAMED_ITEM: &str = "Unnamed item";

/// Convert a listing response into restaurants, in source order.
///
/// Entries without an id are skipped.
///
/// # Errors
///
/// Returns `UnexpectedShape` if no card carries a restaurant grid.
pub fn convert_listing(body: &Value) -> Result<Vec<Restaurant>, SwiggyError> {
    let entries = cards(body)?
        .iter()
        .find_map(|card| card.pointer(RESTAURANT_GRID).and_then(Value::as_array))
        .ok_or_else(|| SwiggyError::UnexpectedShape("no restaurant grid in listing".into()))?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let restaurant = convert_listing_entry(entry.get("info")?);
            if restaurant.is_none() {
                debug!("Skipping listing entry without id");
            }
            restaurant
        })
        .collect())
}

/// Convert one listing entry's `info` object.
#[must_use]
pub fn convert_listing_entry(info: &Value) -> Option<Restaurant> {
    Some(Restaurant {
        id: RestaurantId::new(string_at(info, "/id")?),
        name: string_at(info, "/name"),
        cuisines: strings_at(info, "/cuisines"),
        avg_rating: rating_at(info, "/avgRating"),
        avg_rating_text: string_at(info, "/avgRatingString"),
        delivery_time_minutes: u32_at(info, "/sla/deliveryTime"),
        image_id: string_at(info, "/cloudinaryImageId"),
        area_name: string_at(info, "/areaName"),
        cost_for_two: string_at(info, "/costForTwo"),
    })
}

/// Convert a menu response into restaurant details.
///
/// # Errors
///
/// Returns `UnexpectedShape` if the response has no card list.
pub fn convert_menu(id: &RestaurantId, body: &Value) -> Result<RestaurantDetails, SwiggyError> {
    let cards = cards(body)?;

    let name = cards.iter().find_map(|card| string_at(card, MENU_TITLE));
    let info = cards
        .iter()
        .find_map(|card| card.pointer(MENU_INFO).filter(|info| info.is_object()));

    let categories = cards
        .iter()
        .find_map(|card| card.pointer(MENU_REGULAR_CARDS).and_then(Value::as_array))
        .map(|grouped| grouped.iter().filter_map(convert_category).collect())
        .unwrap_or_default();

    Ok(RestaurantDetails {
        id: id.clone(),
        name: name.or_else(|| info.and_then(|info| string_at(info, "/name"))),
        avg_rating: info.and_then(|info| rating_at(info, "/avgRating")),
        total_ratings: info.and_then(|info| string_at(info, "/totalRatingsString")),
        cost_for_two_message: info.and_then(|info| string_at(info, "/costForTwoMessage")),
        cuisines: info.map(|info| strings_at(info, "/cuisines")).unwrap_or_default(),
        sla: info.and_then(|info| string_at(info, "/sla/slaString")),
        fee_message: info.and_then(|info| string_at(info, "/feeDetails/message")),
        categories,
    })
}

/// Convert a grouped card into a category, if it is an item category.
fn convert_category(grouped: &Value) -> Option<MenuCategory> {
    let card = grouped.pointer("/card/card")?;
    let card_type = string_at(card, "/@type")?;
    if !card_type.ends_with(ITEM_CATEGORY_SUFFIX) {
        return None;
    }

    let items = card
        .get("itemCards")
        .and_then(Value::as_array)
        .map(|cards| {
            cards
                .iter()
                .filter_map(|c| convert_menu_item(c.pointer("/card/info")?))
                .collect()
        })
        .unwrap_or_default();

    Some(MenuCategory {
        title: string_at(card, "/title").unwrap_or_else(|| "Menu".to_string()),
        items,
    })
}

/// Convert one item card's `info` object.
#[must_use]
pub fn convert_menu_item(info: &Value) -> Option<MenuItem> {
    let price = i64_at(info, "/price")
        .or_else(|| i64_at(info, "/defaultPrice"))
        .map(Price::inr);

    Some(MenuItem {
        id: MenuItemId::new(string_at(info, "/id")?),
        name: string_at(info, "/name").unwrap_or_else(|| UNNAMED_ITEM.to_string()),
        price,
        description: string_at(info, "/description"),
        rating: rating_at(info, "/ratings/aggregatedRating/rating"),
        rating_count: string_at(info, "/ratings/aggregatedRating/ratingCountV2")
            .or_else(|| string_at(info, "/ratings/aggregatedRating/ratingCount")),
        ribbon: string_at(info, "/ribbon/text").filter(|text| !text.is_empty()),
        image_id: string_at(info, "/imageId"),
    })
}

// =============================================================================
// Path Helpers
// =============================================================================

fn cards(body: &Value) -> Result<&Vec<Value>, SwiggyError> {
    body.pointer("/data/cards")
        .and_then(Value::as_array)
        .ok_or_else(|| SwiggyError::UnexpectedShape("response has no data.cards".into()))
}

/// String at `pointer`; numbers are stringified (ids arrive as either).
fn string_at(value: &Value, pointer: &str) -> Option<String> {
    match value.pointer(pointer)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn strings_at(value: &Value, pointer: &str) -> Vec<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn i64_at(value: &Value, pointer: &str) -> Option<i64> {
    value.pointer(pointer).and_then(Value::as_i64)
}

fn u32_at(value: &Value, pointer: &str) -> Option<u32> {
    value
        .pointer(pointer)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

/// Rating at `pointer`, accepting either a number or numeric text.
fn rating_at(value: &Value, pointer: &str) -> Option<Rating> {
    match value.pointer(pointer)? {
        Value::Number(n) => Rating::new(n.as_f64()?).ok(),
        Value::String(s) => Rating::parse(s).ok(),
        _ => None,
    }
}
