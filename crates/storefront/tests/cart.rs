//! Cart, user and connectivity flows through the full router.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use axum::http::StatusCode;
use common::{Upstream, get_json, get_page, location, post_form, post_json, test_state};
use serde_json::json;

#[tokio::test]
async fn test_add_item_redirects_back_to_menu() {
    let state = test_state(Upstream::Healthy).await;

    let response = post_form(&state, "/cart/add", "res_id=101&item_id=9001").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/restaurants/101");

    let cart = get_json(&state, "/api/cart").await;
    assert_eq!(cart["count"], 1);
    assert_eq!(cart["subtotal"], "₹249");
    assert_eq!(cart["items"][0]["item"]["name"], "Margherita");
    assert_eq!(cart["items"][0]["restaurant_id"], "101");
}

#[tokio::test]
async fn test_cart_page_lists_added_items() {
    let state = test_state(Upstream::Healthy).await;
    post_form(&state, "/cart/add", "res_id=101&item_id=9001").await;
    post_form(&state, "/cart/add", "res_id=101&item_id=9003").await;

    let (status, html) = get_page(&state, "/cart").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Cart (2 items)"));
    assert!(html.contains("Margherita"));
    assert!(html.contains("Garlic Bread"));
    assert!(html.contains("Subtotal (2 items): ₹348"));
    assert!(html.contains("Remove Item"));
    assert!(html.contains("Clear Cart"));
}

#[tokio::test]
async fn test_add_unknown_item_is_not_found() {
    let state = test_state(Upstream::Healthy).await;
    let response = post_form(&state, "/cart/add", "res_id=101&item_id=nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let cart = get_json(&state, "/api/cart").await;
    assert_eq!(cart["count"], 0);
}

#[tokio::test]
async fn test_add_with_blank_ids_is_bad_request() {
    let state = test_state(Upstream::Healthy).await;
    let response = post_form(&state, "/cart/add", "res_id=&item_id=9001").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_with_control_characters_is_bad_request() {
    let state = test_state(Upstream::Healthy).await;
    let response = post_form(&state, "/cart/add", "res_id=10%0A1&item_id=9001").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let cart = get_json(&state, "/api/cart").await;
    assert_eq!(cart["count"], 0);
}

#[tokio::test]
async fn test_add_when_upstream_fails_is_bad_gateway() {
    let state = test_state(Upstream::Failing).await;
    let response = post_form(&state, "/cart/add", "res_id=101&item_id=9001").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_remove_item() {
    let state = test_state(Upstream::Healthy).await;
    for item in ["9001", "9002", "9003"] {
        post_form(&state, "/cart/add", &format!("res_id=101&item_id={item}")).await;
    }

    // Without an id the most recent line goes
    let response = post_form(&state, "/cart/remove", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");

    let cart = get_json(&state, "/api/cart").await;
    assert_eq!(cart["count"], 2);
    assert_eq!(cart["items"][1]["item"]["id"], "9002");

    post_form(&state, "/cart/remove", "item_id=9001").await;
    let cart = get_json(&state, "/api/cart").await;
    assert_eq!(cart["count"], 1);
    assert_eq!(cart["items"][0]["item"]["id"], "9002");
}

#[tokio::test]
async fn test_clear_cart() {
    let state = test_state(Upstream::Healthy).await;
    post_form(&state, "/cart/add", "res_id=101&item_id=9001").await;
    post_form(&state, "/cart/add", "res_id=101&item_id=9002").await;

    let response = post_form(&state, "/cart/clear", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cart = get_json(&state, "/api/cart").await;
    assert_eq!(cart["count"], 0);

    let (_, html) = get_page(&state, "/cart").await;
    assert!(html.contains("Your cart is empty"));
    assert!(!html.contains(r#"class="item""#));
}

#[tokio::test]
async fn test_set_user_name() {
    let state = test_state(Upstream::Healthy).await;

    let response = post_form(&state, "/user", "name=Aman+Sinha&redirect=%2Fabout").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/about");

    let (_, html) = get_page(&state, "/contact").await;
    assert!(html.contains("Aman Sinha"));
    assert!(!html.contains("Default User"));

    // Blank names are ignored
    post_form(&state, "/user", "name=+++").await;
    let cart = get_json(&state, "/api/cart").await;
    assert_eq!(cart["logged_in_user"], "Aman Sinha");
}

#[tokio::test]
async fn test_set_user_name_never_redirects_off_site() {
    let state = test_state(Upstream::Healthy).await;

    for target in ["%2F%5Cevil.test", "%2F%2Fevil.test", "https%3A%2F%2Fevil.test"] {
        let response = post_form(&state, "/user", &format!("name=x&redirect={target}")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    let response = post_form(&state, "/user", "name=Mallory&redirect=%2Fa%0Ab").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let cart = get_json(&state, "/api/cart").await;
    assert_eq!(cart["logged_in_user"], "x");
}

#[tokio::test]
async fn test_offline_event_short_circuits_pages() {
    let state = test_state(Upstream::Healthy).await;

    let status = get_json(&state, "/api/connectivity").await;
    assert_eq!(status["online"], true);

    let response = post_json(&state, "/api/connectivity", &json!({ "event": "offline" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_str(&common::body_string(response).await).unwrap();
    assert_eq!(body, json!({ "online": false, "changed": true }));

    let (_, html) = get_page(&state, "/").await;
    assert!(html.contains("Looks like you&#39;re offline"));
    assert!(html.contains("Online Status: 🔴"));
    assert!(!html.contains("shimmer-card"));

    let (_, html) = get_page(&state, "/restaurants/101").await;
    assert!(html.contains("Looks like you&#39;re offline"));

    post_json(&state, "/api/connectivity", &json!({ "event": "online" })).await;
    let (_, html) = get_page(&state, "/").await;
    assert!(!html.contains("Looks like you&#39;re offline"));
    assert!(html.contains("Pizza Hut"));
}

#[tokio::test]
async fn test_offline_event_leaves_cart_alone() {
    let state = test_state(Upstream::Healthy).await;
    post_form(&state, "/cart/add", "res_id=101&item_id=9001").await;

    post_json(&state, "/api/connectivity", &json!({ "event": "offline" })).await;
    let cart = get_json(&state, "/api/cart").await;
    assert_eq!(cart["count"], 1);
}

#[tokio::test]
async fn test_unknown_connectivity_event_is_rejected() {
    let state = test_state(Upstream::Healthy).await;
    let response = post_json(&state, "/api/connectivity", &json!({ "event": "sideways" })).await;
    assert!(response.status().is_client_error());

    let status = get_json(&state, "/api/connectivity").await;
    assert_eq!(status["online"], true);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let state = test_state(Upstream::Healthy).await;
    let response = post_form(&state, "/cart/clear", "").await;
    assert!(response.headers().contains_key("x-request-id"));
}
