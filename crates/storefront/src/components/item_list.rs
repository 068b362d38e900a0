use food_villa_core::{MenuItem, RestaurantId};

use super::{PLACEHOLDER, image_url};
use crate::view::{Element, Node};

/// Shown in place of a dish photo when the item has none.
pub const NO_IMAGE: &str = "🍌";

/// The button rendered next to each item.
#[derive(Debug, Clone, Copy)]
pub enum ItemAction<'a> {
    /// "Add +" on a restaurant menu.
    Add(&'a RestaurantId),
    /// "Remove" in the cart.
    Remove,
}

/// List of dishes with an action button each.
#[must_use]
pub fn item_list(items: &[MenuItem], action: ItemAction<'_>, cdn_url: &str) -> Element {
    Element::new("div")
        .class("item-list")
        .children(items.iter().map(|item| item_row(item, action, cdn_url)))
}

fn item_row(item: &MenuItem, action: ItemAction<'_>, cdn_url: &str) -> Element {
    let price = item
        .price
        .map_or_else(|| PLACEHOLDER.to_string(), |p| p.amount().to_string());

    let rating: Node = item.rating.map_or_else(Node::empty, |rating| {
        let count = item
            .rating_count
            .as_deref()
            .map(|c| format!(" ({c})"))
            .unwrap_or_default();
        Element::new("h5")
            .class("item-rating")
            .text(format!("{rating} ★{count}"))
            .into()
    });

    let image: Node = item.image_id.as_deref().map_or_else(
        || NO_IMAGE.into(),
        |id| {
            Element::new("img")
                .class("item-image")
                .attr("src", image_url(cdn_url, id))
                .attr("alt", item.name.as_str())
                .into()
        },
    );

    Element::new("div")
        .key(item.id.as_str())
        .class("item")
        .child(
            Element::new("div")
                .class("item-info")
                .child(
                    item.ribbon
                        .as_deref()
                        .map(|ribbon| Element::new("h5").class("item-ribbon").text(ribbon)),
                )
                .child(Element::new("h3").class("item-name").text(item.name.as_str()))
                .child(Element::new("p").class("item-price").text(format!("₹ {price}")))
                .child(rating)
                .child(
                    item.description
                        .as_deref()
                        .map(|d| Element::new("span").class("item-description").text(d)),
                ),
        )
        .child(
            Element::new("div")
                .class("item-side")
                .child(action_form(item, action))
                .child(image),
        )
}

fn action_form(item: &MenuItem, action: ItemAction<'_>) -> Element {
    let form = Element::new("form")
        .class("item-action")
        .attr("method", "post")
        .child(hidden("item_id", item.id.as_str()));

    match action {
        ItemAction::Add(restaurant_id) => form
            .attr("action", "/cart/add")
            .child(hidden("res_id", restaurant_id.as_str()))
            .child(button("Add +")),
        ItemAction::Remove => form.attr("action", "/cart/remove").child(button("Remove")),
    }
}

fn hidden(name: &str, value: &str) -> Element {
    Element::new("input")
        .attr("type", "hidden")
        .attr("name", name)
        .attr("value", value)
}

fn button(label: &str) -> Element {
    Element::new("button").attr("type", "submit").text(label)
}
