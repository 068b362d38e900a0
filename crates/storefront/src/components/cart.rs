use super::item_list::{ItemAction, item_list};
use crate::store::CartState;
use crate::view::Element;

/// Shown when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Add something from a restaurant menu!";

/// Cart page.
#[must_use]
pub fn cart(cart: &CartState, cdn_url: &str) -> Element {
    let items: Vec<_> = cart.items.iter().map(|line| line.item.clone()).collect();

    let contents = if cart.is_empty() {
        Element::new("p").class("cart-empty").text(EMPTY_CART_MESSAGE)
    } else {
        item_list(&items, ItemAction::Remove, cdn_url)
    };

    Element::new("div")
        .class("cart")
        .child(
            Element::new("div")
                .class("cart-items")
                .child(Element::new("h1").text("Cart"))
                .child(contents),
        )
        .child(
            Element::new("p")
                .class("cart-subtotal")
                .text(format!("Subtotal ({} items): {}", cart.len(), cart.subtotal())),
        )
        .child(cart_button("/cart/remove", "Remove Item"))
        .child(cart_button("/cart/clear", "Clear Cart"))
}

fn cart_button(action: &str, label: &str) -> Element {
    Element::new("form")
        .class("cart-action")
        .attr("method", "post")
        .attr("action", action)
        .child(Element::new("button").attr("type", "submit").text(label))
}
