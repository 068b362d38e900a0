//! Static page handlers.

use axum::extract::State;
use tracing::{instrument, warn};

use super::{PageTemplate, Route, render_page};
use crate::components::{
    AboutProps, LoadState, about as about_page, contact as contact_page, grocery as grocery_page,
};
use crate::state::AppState;

/// About page. The profile card is fetched on every visit.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> PageTemplate {
    let login = &state.config().github.profile_login;
    let profile = match state.github().get_user(login).await {
        Ok(profile) => LoadState::Loaded(profile),
        Err(e) => {
            warn!(error = %e, login = %login, "Failed to fetch GitHub profile");
            LoadState::Loading
        }
    };

    let user_name = state.store().select(|s| s.user.logged_in_user.clone());
    let content = about_page(AboutProps {
        user_name: &user_name,
        profile: &profile,
    });
    render_page(&state, Some(&Route::About), "About", &content)
}

/// Contact page.
#[instrument(skip(state))]
pub async fn contact(State(state): State<AppState>) -> PageTemplate {
    render_page(&state, Some(&Route::Contact), "Contact", &contact_page())
}

/// Grocery page.
#[instrument(skip(state))]
pub async fn grocery(State(state): State<AppState>) -> PageTemplate {
    render_page(&state, Some(&Route::Grocery), "Grocery", &grocery_page())
}
