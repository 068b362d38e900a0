//! JSON API handlers.

use axum::{Json, extract::State};
use food_villa_core::CartLine;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::online::ConnectivityEvent;
use crate::state::AppState;

/// Cart snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub count: usize,
    /// Formatted subtotal, e.g. `₹249.5`.
    pub subtotal: String,
    pub logged_in_user: String,
}

/// Connectivity event delivered by the browser.
#[derive(Debug, Deserialize)]
pub struct ConnectivityRequest {
    pub event: ConnectivityEvent,
}

/// Current online status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectivityResponse {
    pub online: bool,
    /// Whether the delivered event changed the status.
    #[serde(default)]
    pub changed: bool,
}

#[instrument(skip(state))]
pub async fn cart(State(state): State<AppState>) -> Json<CartResponse> {
    let snapshot = state.store().snapshot();
    Json(CartResponse {
        count: snapshot.cart.len(),
        subtotal: snapshot.cart.subtotal().to_string(),
        items: snapshot.cart.items,
        logged_in_user: snapshot.user.logged_in_user,
    })
}

#[instrument(skip(state))]
pub async fn connectivity(State(state): State<AppState>) -> Json<ConnectivityResponse> {
    Json(ConnectivityResponse {
        online: state.online().is_online(),
        changed: false,
    })
}

#[instrument(skip(state))]
pub async fn connectivity_event(
    State(state): State<AppState>,
    Json(request): Json<ConnectivityRequest>,
) -> Json<ConnectivityResponse> {
    let changed = state.online().handle(request.event);
    Json(ConnectivityResponse {
        online: state.online().is_online(),
        changed,
    })
}
