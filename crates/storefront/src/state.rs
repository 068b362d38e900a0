//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::FoodVillaConfig;
use crate::online::OnlineStatus;
use crate::services::{GithubClient, GithubError};
use crate::store::AppStore;
use crate::swiggy::{SwiggyClient, SwiggyError};

/// Error creating application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("restaurant API client: {0}")]
    Swiggy(#[from] SwiggyError),
    #[error("GitHub client: {0}")]
    Github(#[from] GithubError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// API clients, the shared store and the connectivity monitor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FoodVillaConfig,
    swiggy: SwiggyClient,
    github: GithubClient,
    store: AppStore,
    online: OnlineStatus,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client fails to build.
    pub fn new(config: FoodVillaConfig) -> Result<Self, StateError> {
        let swiggy = SwiggyClient::new(&config.api)?;
        let github = GithubClient::new(&config.github)?;
        let store = AppStore::new(config.ui.default_user.clone());

        store.subscribe(|state| {
            tracing::debug!(
                cart_items = state.cart.len(),
                subtotal = %state.cart.subtotal(),
                user = %state.user.logged_in_user,
                "Store changed"
            );
        });

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                swiggy,
                github,
                store,
                online: OnlineStatus::new(),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &FoodVillaConfig {
        &self.inner.config
    }

    /// Get a reference to the restaurant API client.
    #[must_use]
    pub fn swiggy(&self) -> &SwiggyClient {
        &self.inner.swiggy
    }

    /// Get a reference to the GitHub API client.
    #[must_use]
    pub fn github(&self) -> &GithubClient {
        &self.inner.github
    }

    /// Get a reference to the shared store.
    #[must_use]
    pub fn store(&self) -> &AppStore {
        &self.inner.store
    }

    /// Get a reference to the connectivity monitor.
    #[must_use]
    pub fn online(&self) -> &OnlineStatus {
        &self.inner.online
    }
}
