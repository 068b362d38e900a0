use food_villa_core::Restaurant;

use super::{PLACEHOLDER, image_url};
use crate::routes::Route;
use crate::view::Element;

/// Shown when a listing entry has no name.
pub const UNNAMED_RESTAURANT: &str = "Unnamed restaurant";

/// Listing card for one restaurant, linking to its menu.
#[must_use]
pub fn card(restaurant: &Restaurant, cdn_url: &str) -> Element {
    let image = restaurant.image_id.as_deref().map_or_else(
        || Element::new("div").class("card-image placeholder").text("🍽"),
        |id| {
            Element::new("img")
                .class("card-image")
                .attr("src", image_url(cdn_url, id))
                .attr("alt", "food image")
                .attr("loading", "lazy")
        },
    );

    let cuisines = if restaurant.cuisines.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        restaurant.cuisines.join(", ")
    };

    let rating = restaurant
        .rating_label()
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let delivery = restaurant
        .delivery_time_minutes
        .map_or_else(|| PLACEHOLDER.to_string(), |m| m.to_string());

    Element::new("a")
        .key(restaurant.id.as_str())
        .class("card")
        .attr("href", Route::Restaurant(restaurant.id.clone()).href())
        .child(image)
        .child(
            Element::new("div")
                .class("card-description")
                .child(
                    Element::new("h3")
                        .class("card-name")
                        .text(restaurant.name.as_deref().unwrap_or(UNNAMED_RESTAURANT)),
                )
                .child(Element::new("h4").class("card-cuisines").text(cuisines))
                .child(
                    Element::new("div")
                        .class("card-meta")
                        .child(Element::new("h5").class("card-rating").text(format!("{rating} ★")))
                        .child(
                            Element::new("h5")
                                .class("card-delivery")
                                .text(format!("{delivery} min")),
                        ),
                ),
        )
}
