use crate::routes::Route;
use crate::view::Element;

/// Page shown for unknown routes and server errors.
#[must_use]
pub fn error_page(status: u16, message: &str) -> Element {
    Element::new("div")
        .class("error-page")
        .child(Element::new("h1").text("Oops!!"))
        .child(Element::new("h2").text("Something went wrong!!"))
        .child(Element::new("h3").class("error-status").text(format!("{status}: {message}")))
        .child(
            Element::new("a")
                .attr("href", Route::Home.href())
                .text("Back to home"),
        )
}

/// Replaces page content while the browser reports no connection.
#[must_use]
pub fn offline_notice() -> Element {
    Element::new("div").class("offline").child(
        Element::new("h1").text("Looks like you're offline!! Please check your internet connection."),
    )
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_error_page() {
        let tree = error_page(404, "Not Found");
        assert!(tree.text_content().starts_with("Oops!!Something went wrong!!"));
        assert_eq!(tree.find_by_class("error-status")[0].text_content(), "404: Not Found");
    }

    #[test]
    fn test_offline_notice() {
        assert!(offline_notice().text_content().contains("offline"));
    }
}
