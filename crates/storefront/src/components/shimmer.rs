use crate::view::Element;

/// Number of placeholder cards in the skeleton.
pub const SHIMMER_BLOCKS: usize = 9;

/// Loading skeleton.
#[must_use]
pub fn shimmer() -> Element {
    Element::new("div")
        .class("shimmer")
        .attr("aria-busy", "true")
        .children((0..SHIMMER_BLOCKS).map(|_| Element::new("div").class("shimmer-card")))
}
