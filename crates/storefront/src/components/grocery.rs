use crate::view::Element;

#[must_use]
pub fn grocery() -> Element {
    Element::new("div")
        .class("grocery")
        .child(Element::new("h1").text("Grocery"))
        .child(Element::new("p").text(
            "Our grocery store is on its way. Fresh produce, pantry staples and more, delivered with your meal.",
        ))
}
