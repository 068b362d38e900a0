use crate::routes::Route;
use crate::view::Element;

/// Props for [`header`].
#[derive(Debug, Clone, Copy)]
pub struct HeaderProps<'a> {
    pub logo_url: &'a str,
    pub online: bool,
    pub cart_count: usize,
    pub user_name: &'a str,
    /// Highlighted nav entry, if the page is one of them.
    pub current: Option<&'a Route>,
}

/// Site header: logo, connectivity, navigation, cart and user.
#[must_use]
pub fn header(props: HeaderProps<'_>) -> Element {
    let nav_item = |route: Route| {
        let label = if route == Route::Cart {
            format!("Cart ({} items)", props.cart_count)
        } else {
            route.title().to_string()
        };
        let link = Element::new("a").attr("href", route.href()).text(label);
        let link = if props.current == Some(&route) {
            link.class("active").attr("aria-current", "page")
        } else {
            link
        };
        Element::new("li").child(link)
    };

    Element::new("header")
        .class("header")
        .child(
            Element::new("a").class("header-logo").attr("href", Route::Home.href()).child(
                Element::new("img")
                    .attr("src", props.logo_url)
                    .attr("alt", "logo"),
            ),
        )
        .child(
            Element::new("nav").class("nav-items").child(
                Element::new("ul")
                    .child(
                        Element::new("li")
                            .class("online-status")
                            .text(format!("Online Status: {}", if props.online { "✅" } else { "🔴" })),
                    )
                    .children(Route::NAV.into_iter().map(nav_item))
                    .child(Element::new("li").class("user-name").text(props.user_name)),
            ),
        )
}
