//! Cart route handlers.
//!
//! The cart lives in the process-wide store; every mutation is a store
//! dispatch followed by a redirect.

use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use food_villa_core::{CartLine, MenuItemId, RestaurantId};
use serde::Deserialize;
use tracing::instrument;

use super::{PageTemplate, Route, redirect_to, render_page};
use crate::components::cart as cart_page;
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::Action;

/// Form data for adding a menu item.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub res_id: String,
    pub item_id: String,
}

/// Form data for removing an item.
#[derive(Debug, Default, Deserialize)]
pub struct RemoveForm {
    /// Item to remove; blank or absent removes the most recently added line.
    pub item_id: Option<String>,
}

/// Cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> PageTemplate {
    let cart = state.store().select(|s| s.cart.clone());
    let content = cart_page(&cart, &state.config().api.cdn_url);
    render_page(&state, Some(&Route::Cart), "Cart", &content)
}

/// Add a menu item to the cart.
///
/// The item is looked up in the restaurant's (cached) menu so the cart holds
/// the same snapshot the menu page showed.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddForm>) -> Result<Redirect> {
    let restaurant_id = RestaurantId::new(form.res_id.trim());
    let item_id = MenuItemId::new(form.item_id.trim());
    if restaurant_id.as_str().is_empty() || item_id.as_str().is_empty() {
        return Err(AppError::BadRequest("res_id and item_id are required".to_string()));
    }
    let back = redirect_to(&Route::Restaurant(restaurant_id.clone()).href())?;

    let menu = state.swiggy().get_menu(&restaurant_id).await.map_err(|e| {
        tracing::error!(error = %e, restaurant_id = %restaurant_id, "Failed to fetch menu for add");
        e
    })?;

    let item = menu.find_item(&item_id).cloned().ok_or_else(|| {
        AppError::NotFound(format!("item {item_id} on restaurant {restaurant_id}"))
    })?;

    tracing::info!(item_id = %item_id, restaurant_id = %restaurant_id, "Adding item to cart");
    state
        .store()
        .dispatch(Action::AddItem(CartLine::new(restaurant_id, item)));

    Ok(back)
}

/// Remove an item from the cart.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Form(form): Form<RemoveForm>) -> Redirect {
    let item_id = form
        .item_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(MenuItemId::new);

    state.store().dispatch(Action::RemoveItem(item_id));
    Redirect::to(&Route::Cart.href())
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Redirect {
    state.store().dispatch(Action::ClearCart);
    Redirect::to(&Route::Cart.href())
}
