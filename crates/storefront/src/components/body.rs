use super::card::card;
use super::error_page::offline_notice;
use super::shimmer::shimmer;
use super::LoadState;
use crate::listing::{ListingQuery, ListingState};
use crate::routes::Route;
use crate::view::Element;

/// Shown when filters leave nothing to display.
pub const NO_MATCHES: &str = "No restaurants match your filters.";

/// Props for [`body`].
#[derive(Debug, Clone, Copy)]
pub struct BodyProps<'a> {
    pub listing: &'a LoadState<ListingState>,
    pub query: &'a ListingQuery,
    pub cdn_url: &'a str,
    pub online: bool,
    pub user_name: &'a str,
    pub top_rated_threshold: f64,
}

/// Home page: filter controls and the restaurant grid.
#[must_use]
pub fn body(props: BodyProps<'_>) -> Element {
    if !props.online {
        return offline_notice();
    }

    props.listing.render_or_shimmer(|listing| {
        // The upstream API answers an unserviceable location with an empty grid
        if listing.all().is_empty() {
            return shimmer();
        }

        let cards = if listing.displayed().is_empty() {
            Element::new("p").class("no-matches").text(NO_MATCHES)
        } else {
            Element::new("div")
                .class("res-container")
                .children(listing.displayed().iter().map(|r| card(r, props.cdn_url)))
        };

        Element::new("div")
            .class("body")
            .child(filter_bar(props))
            .child(cards)
    })
}

fn filter_bar(props: BodyProps<'_>) -> Element {
    let search = props.query.search.as_deref().unwrap_or_default();

    let search_form = Element::new("form")
        .class("search")
        .attr("method", "get")
        .attr("action", Route::Home.href())
        .child(
            Element::new("input")
                .attr("type", "text")
                .attr("name", "search")
                .attr("value", search)
                .attr("placeholder", "Search restaurants"),
        )
        .child(Element::new("button").attr("type", "submit").text("Search"));

    let top_rated_form = Element::new("form")
        .class("top-rated")
        .attr("method", "get")
        .attr("action", Route::Home.href())
        .child(
            Element::new("input")
                .attr("type", "hidden")
                .attr("name", "top_rated")
                .attr("value", "1"),
        )
        .child(
            Element::new("button")
                .attr("type", "submit")
                .attr("title", format!("Rated {} and above", props.top_rated_threshold))
                .text("Top Rated Restaurants"),
        );

    let user_form = Element::new("form")
        .class("user-form")
        .attr("method", "post")
        .attr("action", "/user")
        .child(Element::new("label").text("UserName: "))
        .child(
            Element::new("input")
                .attr("type", "text")
                .attr("name", "name")
                .attr("value", props.user_name),
        )
        .child(
            Element::new("input")
                .attr("type", "hidden")
                .attr("name", "redirect")
                .attr("value", Route::Home.href()),
        )
        .child(Element::new("button").attr("type", "submit").text("Save"));

    Element::new("div")
        .class("filter")
        .child(search_form)
        .child(top_rated_form)
        .child_if(props.query.is_filtered(), || {
            Element::new("a")
                .class("reset")
                .attr("href", Route::Home.href())
                .text("Show all")
                .into()
        })
        .child(user_form)
}
