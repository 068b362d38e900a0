//! Home page route handler.

use axum::extract::{Query, State};
use tracing::{instrument, warn};

use super::{PageTemplate, Route, render_page};
use crate::components::{BodyProps, LoadState, body};
use crate::listing::{ListingQuery, ListingState};
use crate::state::AppState;

/// Restaurant listing with the filters from the query string applied.
///
/// A failed fetch leaves the page in its loading state.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>, Query(query): Query<ListingQuery>) -> PageTemplate {
    let config = state.config();
    let threshold = config.ui.top_rated_threshold;

    let listing = match state.swiggy().get_restaurants().await {
        Ok(all) => {
            let mut listing = ListingState::new(all);
            listing.apply(&query, threshold);
            tracing::debug!(
                total = listing.all().len(),
                displayed = listing.displayed().len(),
                "Listing filtered"
            );
            LoadState::Loaded(listing)
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch restaurant listing");
            LoadState::Loading
        }
    };

    let user_name = state.store().select(|s| s.user.logged_in_user.clone());
    let content = body(BodyProps {
        listing: &listing,
        query: &query,
        cdn_url: &config.api.cdn_url,
        online: state.online().is_online(),
        user_name: &user_name,
        top_rated_threshold: threshold,
    });

    render_page(&state, Some(&Route::Home), "Food Villa", &content)
}
