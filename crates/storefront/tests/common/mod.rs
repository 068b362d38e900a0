//! Shared fixtures: a local stand-in for the restaurant and GitHub APIs and
//! helpers for driving the storefront router.

#![allow(clippy::unwrap_used, dead_code)]

use std::net::SocketAddr;

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query},
    http::{Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use food_villa_storefront::{config::FoodVillaConfig, state::AppState};
use serde::Deserialize;
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;

/// How the fixture upstream behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Healthy,
    /// Every endpoint answers 500.
    Failing,
}

pub fn listing_body() -> Value {
    json!({
        "data": {
            "cards": [
                { "card": { "card": { "id": "top_brands", "header": { "title": "Top brands" } } } },
                { "card": { "card": { "gridElements": { "infoWithStyle": { "restaurants": [
                    { "info": {
                        "id": "101",
                        "name": "Pizza Hut",
                        "cuisines": ["Pizzas", "Italian"],
                        "avgRating": 4.2,
                        "avgRatingString": "4.2",
                        "sla": { "deliveryTime": 30 },
                        "cloudinaryImageId": "img101"
                    } },
                    { "info": {
                        "id": "102",
                        "name": "Burger King",
                        "cuisines": ["Burgers"],
                        "avgRating": 4.6,
                        "avgRatingString": "4.6",
                        "sla": { "deliveryTime": 25 }
                    } },
                    { "info": {
                        "id": "103",
                        "name": "Domino's Pizza",
                        "cuisines": ["Pizzas"],
                        "avgRating": 4.8,
                        "avgRatingString": "4.8"
                    } },
                    { "info": { "id": 104 } },
                    { "info": { "name": "No Id Diner" } }
                ] } } } } }
            ]
        }
    })
}

pub fn menu_body() -> Value {
    json!({
        "data": {
            "cards": [
                { "card": { "card": { "text": "Pizza Hut" } } },
                { "card": { "card": { "info": {
                    "name": "Pizza Hut",
                    "avgRating": 4.2,
                    "totalRatingsString": "10K+ ratings",
                    "costForTwoMessage": "₹350 for two",
                    "cuisines": ["Pizzas", "Italian"],
                    "sla": { "slaString": "30-35 mins" },
                    "feeDetails": { "message": "Free delivery on orders above ₹199" }
                } } } },
                { "groupedCard": { "cardGroupMap": { "REGULAR": { "cards": [
                    { "card": { "card": { "@type": "type.googleapis.com/swiggy.presentation.food.v2.Carousel" } } },
                    { "card": { "card": {
                        "@type": "type.googleapis.com/swiggy.presentation.food.v2.ItemCategory",
                        "title": "Recommended",
                        "itemCards": [
                            { "card": { "info": {
                                "id": "9001",
                                "name": "Margherita",
                                "price": 24900,
                                "description": "Classic cheese pizza",
                                "ribbon": { "text": "Bestseller" },
                                "ratings": { "aggregatedRating": { "rating": "4.5", "ratingCountV2": "120" } }
                            } } },
                            { "card": { "info": {
                                "id": "9002",
                                "name": "Farmhouse",
                                "defaultPrice": 39900
                            } } }
                        ]
                    } } },
                    { "card": { "card": {
                        "@type": "type.googleapis.com/swiggy.presentation.food.v2.ItemCategory",
                        "title": "Sides",
                        "itemCards": [
                            { "card": { "info": { "id": "9003", "name": "Garlic Bread", "price": 9900 } } }
                        ]
                    } } }
                ] } } } }
            ]
        }
    })
}

#[derive(Deserialize)]
struct MenuParams {
    #[serde(rename = "restaurantId")]
    restaurant_id: String,
}

async fn listing() -> Json<Value> {
    Json(listing_body())
}

async fn menu(Query(params): Query<MenuParams>) -> Response {
    if params.restaurant_id == "101" {
        Json(menu_body()).into_response()
    } else {
        (StatusCode::NOT_FOUND, "unknown restaurant").into_response()
    }
}

async fn github_user(Path(login): Path<String>) -> Json<Value> {
    Json(json!({
        "login": login,
        "name": "Aman Sinha",
        "location": "Dehradun",
        "avatar_url": "https://avatars.test/1",
        "public_repos": 12
    }))
}

async fn failing() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Start the fixture upstream on an ephemeral port.
pub async fn spawn_upstream(mode: Upstream) -> SocketAddr {
    let router = match mode {
        Upstream::Healthy => Router::new()
            .route("/listing", get(listing))
            .route("/menu", get(menu))
            .route("/github/users/{login}", get(github_user)),
        Upstream::Failing => Router::new().fallback(failing),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Configuration pointing every upstream at the fixture.
pub fn config_for(addr: SocketAddr) -> FoodVillaConfig {
    let mut config = FoodVillaConfig::default();
    config.api.listing_url = Url::parse(&format!("http://{addr}/listing")).unwrap();
    config.api.menu_url = Url::parse(&format!("http://{addr}/menu?page-type=REGULAR_MENU")).unwrap();
    config.api.cdn_url = "https://cdn.test/".to_string();
    config.github.api_url = Url::parse(&format!("http://{addr}/github/")).unwrap();
    config
}

/// Fresh application state backed by a fixture upstream.
pub async fn test_state(mode: Upstream) -> AppState {
    let addr = spawn_upstream(mode).await;
    AppState::new(config_for(addr)).unwrap()
}

/// Send one request through the full router.
pub async fn send(state: &AppState, request: Request<Body>) -> Response {
    food_villa_storefront::app(state.clone())
        .oneshot(request)
        .await
        .unwrap()
}

pub async fn get_page(state: &AppState, uri: &str) -> (StatusCode, String) {
    let response = send(state, Request::get(uri).body(Body::empty()).unwrap()).await;
    let status = response.status();
    (status, body_string(response).await)
}

pub async fn post_form(state: &AppState, uri: &str, form: &str) -> Response {
    send(
        state,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_json(state: &AppState, uri: &str, body: &Value) -> Response {
    send(
        state,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn get_json(state: &AppState, uri: &str) -> Value {
    let response = send(state, Request::get(uri).body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_string(response).await).unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
