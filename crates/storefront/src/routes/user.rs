//! Logged-in user handler.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use super::{Route, redirect_to};
use crate::error::Result;
use crate::state::AppState;
use crate::store::Action;

/// Form data for renaming the logged-in user.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub name: String,
    /// Local path to return to.
    pub redirect: Option<String>,
}

/// Set the logged-in user's display name.
#[instrument(skip(state))]
pub async fn set_name(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Redirect> {
    let target = redirect_to(&safe_redirect(form.redirect.as_deref()))?;
    state.store().dispatch(Action::SetUserName(form.name));
    Ok(target)
}

/// Only same-site paths are followed; anything else goes home.
///
/// Browsers read `\` as `/`, so a backslash anywhere can smuggle in a
/// protocol-relative target.
fn safe_redirect(target: Option<&str>) -> String {
    match target {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => Route::Home.href(),
    }
}
