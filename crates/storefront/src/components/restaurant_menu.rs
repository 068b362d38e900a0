use food_villa_core::{MenuCategory, RestaurantDetails};

use super::item_list::{ItemAction, item_list};
use super::{PLACEHOLDER, card::UNNAMED_RESTAURANT};
use crate::routes::Route;
use crate::view::Element;

/// Props for [`restaurant_menu`].
#[derive(Debug, Clone, Copy)]
pub struct MenuProps<'a> {
    pub details: &'a RestaurantDetails,
    /// Index of the expanded category; `None` collapses all.
    pub open: Option<usize>,
    pub cdn_url: &'a str,
}

/// A restaurant's header card followed by its category accordion.
#[must_use]
pub fn restaurant_menu(props: MenuProps<'_>) -> Element {
    let details = props.details;
    let or_placeholder = |value: Option<&str>| value.unwrap_or(PLACEHOLDER).to_string();

    let rating = details
        .avg_rating
        .map_or_else(|| PLACEHOLDER.to_string(), |r| r.to_string());

    let summary = format!(
        "{rating} ({}) || {}",
        or_placeholder(details.total_ratings.as_deref()),
        or_placeholder(details.cost_for_two_message.as_deref()),
    );

    let cuisines = if details.cuisines.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        details.cuisines.join(", ")
    };

    Element::new("div")
        .class("restaurant-menu")
        .child(
            Element::new("h1")
                .class("menu-title")
                .text(details.name.as_deref().unwrap_or(UNNAMED_RESTAURANT)),
        )
        .child(
            Element::new("div")
                .class("info-card")
                .child(Element::new("h4").class("menu-summary").text(summary))
                .child(Element::new("h4").class("menu-cuisines").text(cuisines))
                .child(
                    Element::new("p")
                        .class("menu-sla")
                        .text(or_placeholder(details.sla.as_deref())),
                )
                .child(
                    Element::new("p")
                        .class("menu-fee")
                        .text(or_placeholder(details.fee_message.as_deref())),
                ),
        )
        .children(details.categories.iter().enumerate().map(|(index, category)| {
            restaurant_category(details, category, index, props.open == Some(index), props.cdn_url)
        }))
}

/// One accordion section. Only the open section lists its items.
#[must_use]
pub fn restaurant_category(
    details: &RestaurantDetails,
    category: &MenuCategory,
    index: usize,
    show_items: bool,
    cdn_url: &str,
) -> Element {
    let base = Route::Restaurant(details.id.clone()).href();
    let toggle_href = if show_items {
        format!("{base}?open=none")
    } else {
        format!("{base}?open={index}")
    };

    Element::new("section")
        .key(index.to_string())
        .class(if show_items { "category open" } else { "category" })
        .child(
            Element::new("a")
                .class("category-toggle")
                .attr("href", toggle_href)
                .child(
                    Element::new("h2")
                        .class("category-title")
                        .text(format!("{} ({})", category.title, category.items.len())),
                )
                .child(Element::new("span").text(if show_items { "⬆️" } else { "⬇️" })),
        )
        .child_if(show_items, || {
            item_list(&category.items, ItemAction::Add(&details.id), cdn_url).into()
        })
}
