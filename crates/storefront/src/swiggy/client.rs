//! Restaurant API client implementation.

use std::sync::Arc;

use food_villa_core::{Restaurant, RestaurantDetails, RestaurantId};
use moka::future::Cache;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::SwiggyError;
use super::cache::{CacheKey, CacheValue};
use super::conversions::{convert_listing, convert_menu};
use crate::config::RestaurantApiConfig;

/// The API rejects requests without a browser-like user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) FoodVilla/0.1";

/// Client for the restaurant listing and menu endpoints.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct SwiggyClient {
    inner: Arc<SwiggyClientInner>,
}

struct SwiggyClientInner {
    client: reqwest::Client,
    listing_url: Url,
    menu_url: Url,
    cache: Cache<CacheKey, CacheValue>,
}

impl SwiggyClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &RestaurantApiConfig) -> Result<Self, SwiggyError> {
        let cache = Cache::builder()
            .max_capacity(256)
            .time_to_live(config.cache_ttl)
            .build();

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            inner: Arc::new(SwiggyClientInner {
                client,
                listing_url: config.listing_url.clone(),
                menu_url: config.menu_url.clone(),
                cache,
            }),
        })
    }

    /// Menu endpoint for one restaurant.
    #[must_use]
    pub fn menu_url(&self, id: &RestaurantId) -> Url {
        let mut url = self.inner.menu_url.clone();
        url.query_pairs_mut().append_pair("restaurantId", id.as_str());
        url
    }

    /// Fetch the restaurant listing for the configured location.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success,
    /// or the body has no restaurant grid.
    #[instrument(skip(self))]
    pub async fn get_restaurants(&self) -> Result<Arc<Vec<Restaurant>>, SwiggyError> {
        if let Some(CacheValue::Listing(listing)) = self.inner.cache.get(&CacheKey::Listing).await
        {
            debug!("Cache hit for listing");
            return Ok(listing);
        }

        let body = self.fetch_json(self.inner.listing_url.clone()).await?;
        let listing = Arc::new(convert_listing(&body)?);
        debug!(count = listing.len(), "Fetched listing");

        self.inner
            .cache
            .insert(CacheKey::Listing, CacheValue::Listing(Arc::clone(&listing)))
            .await;

        Ok(listing)
    }

    /// Fetch one restaurant's menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success,
    /// or the body has no card list.
    #[instrument(skip(self), fields(restaurant_id = %id))]
    pub async fn get_menu(&self, id: &RestaurantId) -> Result<Arc<RestaurantDetails>, SwiggyError> {
        let key = CacheKey::Menu(id.clone());
        if let Some(CacheValue::Menu(menu)) = self.inner.cache.get(&key).await {
            debug!("Cache hit for menu");
            return Ok(menu);
        }

        let body = self.fetch_json(self.menu_url(id)).await?;
        let menu = Arc::new(convert_menu(id, &body)?);
        debug!(items = menu.item_count(), "Fetched menu");

        self.inner
            .cache
            .insert(key, CacheValue::Menu(Arc::clone(&menu)))
            .await;

        Ok(menu)
    }

    /// GET a URL and parse the body as JSON.
    async fn fetch_json(&self, url: Url) -> Result<Value, SwiggyError> {
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Restaurant API returned non-success status"
            );
            return Err(SwiggyError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse restaurant API response"
            );
            SwiggyError::Parse(e)
        })
    }
}
