//! Restaurant menu route handler.

use axum::extract::{Path, Query, State};
use food_villa_core::RestaurantId;
use serde::Deserialize;
use tracing::{instrument, warn};

use super::{PageTemplate, Route, render_page};
use crate::components::{LoadState, MenuProps, offline_notice, restaurant_menu};
use crate::state::AppState;

/// Query string for the menu page.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// Expanded category index, or `none` to collapse all.
    pub open: Option<String>,
}

impl MenuQuery {
    /// Index of the expanded category. The first category starts open;
    /// unparseable values fall back to it.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        match self.open.as_deref().map(str::trim) {
            None | Some("") => Some(0),
            Some("none") => None,
            Some(index) => Some(index.parse().unwrap_or(0)),
        }
    }
}

/// Menu page for one restaurant.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(res_id): Path<String>,
    Query(query): Query<MenuQuery>,
) -> PageTemplate {
    let id = RestaurantId::new(res_id);
    let route = Route::Restaurant(id.clone());

    if !state.online().is_online() {
        return render_page(&state, Some(&route), "Offline", &offline_notice());
    }

    let details = match state.swiggy().get_menu(&id).await {
        Ok(details) => LoadState::Loaded(details),
        Err(e) => {
            warn!(error = %e, restaurant_id = %id, "Failed to fetch menu");
            LoadState::Loading
        }
    };

    let title = details
        .as_loaded()
        .and_then(|d| d.name.clone())
        .unwrap_or_else(|| "Menu".to_string());

    let content = details.render_or_shimmer(|details| {
        restaurant_menu(MenuProps {
            details: &**details,
            open: query.open_index(),
            cdn_url: &state.config().api.cdn_url,
        })
    });

    render_page(&state, Some(&route), &title, &content)
}
