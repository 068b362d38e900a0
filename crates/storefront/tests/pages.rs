//! Page rendering through the full router.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use axum::http::StatusCode;
use common::{Upstream, get_page, test_state};

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in page"))
}

#[tokio::test]
async fn test_home_lists_restaurants_in_source_order() {
    let state = test_state(Upstream::Healthy).await;
    let (status, html) = get_page(&state, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(position(&html, "Pizza Hut") < position(&html, "Burger King"));
    assert!(position(&html, "Burger King") < position(&html, "Domino&#39;s Pizza"));
    assert!(html.contains(r#"href="/restaurants/101""#));
    assert!(html.contains("https://cdn.test/img101"));
    assert!(!html.contains("No Id Diner"));
}

#[tokio::test]
async fn test_missing_fields_render_placeholders() {
    let state = test_state(Upstream::Healthy).await;
    let (_, html) = get_page(&state, "/").await;

    // Entry 104 has only an id
    assert!(html.contains(r#"data-key="104""#));
    assert!(html.contains("Unnamed restaurant"));
    assert!(html.contains("-- ★"));
    assert!(html.contains("-- min"));
}

#[tokio::test]
async fn test_min_rating_filter() {
    let state = test_state(Upstream::Healthy).await;
    let (_, html) = get_page(&state, "/?min_rating=4.5").await;

    assert!(!html.contains(r#"data-key="101""#));
    assert!(html.contains(r#"data-key="102""#));
    assert!(html.contains(r#"data-key="103""#));
    assert!(!html.contains(r#"data-key="104""#));
    assert!(position(&html, r#"data-key="102""#) < position(&html, r#"data-key="103""#));
}

#[tokio::test]
async fn test_top_rated_uses_configured_threshold() {
    let state = test_state(Upstream::Healthy).await;
    let (_, html) = get_page(&state, "/?top_rated=1").await;

    assert!(!html.contains(r#"data-key="101""#));
    assert!(html.contains(r#"data-key="102""#));
    assert!(html.contains("Show all"));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let state = test_state(Upstream::Healthy).await;
    let (_, html) = get_page(&state, "/?search=PIZZA").await;

    assert!(html.contains(r#"data-key="101""#));
    assert!(html.contains(r#"data-key="103""#));
    assert!(!html.contains(r#"data-key="102""#));
}

#[tokio::test]
async fn test_search_without_matches() {
    let state = test_state(Upstream::Healthy).await;
    let (status, html) = get_page(&state, "/?search=sushi").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No restaurants match"));
    assert!(!html.contains("shimmer-card"));
}

#[tokio::test]
async fn test_failed_listing_fetch_stays_loading() {
    let state = test_state(Upstream::Failing).await;
    let (status, html) = get_page(&state, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches(r#"class="shimmer-card""#).count(), 9);
}

#[tokio::test]
async fn test_menu_opens_first_category_by_default() {
    let state = test_state(Upstream::Healthy).await;
    let (status, html) = get_page(&state, "/restaurants/101").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Pizza Hut | Food Villa</title>"));
    assert!(html.contains("4.2 (10K+ ratings) || ₹350 for two"));
    assert!(html.contains("Recommended (2)"));
    assert!(html.contains("Sides (1)"));
    assert!(html.contains("Margherita"));
    assert!(html.contains("₹ 249"));
    assert!(html.contains("₹ 399"));
    assert!(html.contains("Bestseller"));
    assert!(!html.contains("Garlic Bread"));
}

#[tokio::test]
async fn test_menu_accordion_query() {
    let state = test_state(Upstream::Healthy).await;

    let (_, html) = get_page(&state, "/restaurants/101?open=1").await;
    assert!(html.contains("Garlic Bread"));
    assert!(!html.contains("Margherita"));

    let (_, html) = get_page(&state, "/restaurants/101?open=none").await;
    assert!(!html.contains("Garlic Bread"));
    assert!(!html.contains("Margherita"));
}

#[tokio::test]
async fn test_unknown_restaurant_stays_loading() {
    let state = test_state(Upstream::Healthy).await;
    let (status, html) = get_page(&state, "/restaurants/999").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("shimmer-card"));
}

#[tokio::test]
async fn test_about_page_shows_both_profiles() {
    let state = test_state(Upstream::Healthy).await;
    let (status, html) = get_page(&state, "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("This is a Functional Component"));
    assert!(html.contains("This is a Class Component"));
    assert!(html.contains("Name: Aman Sinha"));
    assert!(html.contains("https://avatars.test/1"));
}

#[tokio::test]
async fn test_about_page_without_profile() {
    let state = test_state(Upstream::Failing).await;
    let (status, html) = get_page(&state, "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("This is a Class Component"));
    assert!(!html.contains("avatar"));
}

#[tokio::test]
async fn test_static_pages() {
    let state = test_state(Upstream::Healthy).await;

    let (status, html) = get_page(&state, "/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Contact Us"));
    assert!(html.contains("contact@ourrestaurant.com"));

    let (status, html) = get_page(&state, "/grocery").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Grocery</h1>"));
}

#[tokio::test]
async fn test_header_on_every_page() {
    let state = test_state(Upstream::Healthy).await;
    for path in ["/", "/about", "/contact", "/grocery", "/cart"] {
        let (_, html) = get_page(&state, path).await;
        assert!(html.contains("Online Status: ✅"), "{path}");
        assert!(html.contains("Cart (0 items)"), "{path}");
        assert!(html.contains("Default User"), "{path}");
    }
}

#[tokio::test]
async fn test_unknown_path_renders_error_page() {
    let state = test_state(Upstream::Healthy).await;
    let (status, html) = get_page(&state, "/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Oops!!"));
    assert!(html.contains("Something went wrong!!"));
    assert!(html.contains("404: Not Found"));
}

#[tokio::test]
async fn test_health() {
    let state = test_state(Upstream::Healthy).await;
    let (status, body) = get_page(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
