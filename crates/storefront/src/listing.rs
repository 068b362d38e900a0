//! Client-side filtering of the fetched restaurant listing.
//!
//! The full listing is kept next to the displayed subset so that every
//! filter starts from the complete list. Filters keep source order.

use std::sync::Arc;

use food_villa_core::Restaurant;
use serde::Deserialize;

/// Entries whose name contains `query`, ignoring case.
///
/// A blank query matches everything; entries without a name never match a
/// non-blank query.
#[must_use]
pub fn filter_by_name(restaurants: &[Restaurant], query: &str) -> Vec<Restaurant> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return restaurants.to_vec();
    }
    restaurants
        .iter()
        .filter(|r| {
            r.name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Entries rated at least `threshold`. Unrated entries never pass.
#[must_use]
pub fn filter_by_min_rating(restaurants: &[Restaurant], threshold: f64) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|r| r.avg_rating.is_some_and(|rating| rating.at_least(threshold)))
        .cloned()
        .collect()
}

/// Filter parameters from the listing page's query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    /// Any non-empty value enables the configured top-rated threshold.
    pub top_rated: Option<String>,
    pub min_rating: Option<f64>,
}

impl ListingQuery {
    /// The rating threshold in effect, if any. An explicit `min_rating` wins
    /// over `top_rated`.
    #[must_use]
    pub fn rating_threshold(&self, top_rated_threshold: f64) -> Option<f64> {
        self.min_rating.or_else(|| {
            self.top_rated
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|_| top_rated_threshold)
        })
    }

    /// Whether any filter is set.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.trim().is_empty())
            || self.min_rating.is_some()
            || self.top_rated.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// The fetched listing and the currently displayed subset.
#[derive(Debug, Clone)]
pub struct ListingState {
    all: Arc<Vec<Restaurant>>,
    displayed: Vec<Restaurant>,
}

impl ListingState {
    #[must_use]
    pub fn new(all: Arc<Vec<Restaurant>>) -> Self {
        let displayed = all.as_ref().clone();
        Self { all, displayed }
    }

    /// The unfiltered listing.
    #[must_use]
    pub fn all(&self) -> &[Restaurant] {
        &self.all
    }

    #[must_use]
    pub fn displayed(&self) -> &[Restaurant] {
        &self.displayed
    }

    pub fn filter_by_name(&mut self, query: &str) {
        self.displayed = filter_by_name(&self.all, query);
    }

    pub fn filter_by_min_rating(&mut self, threshold: f64) {
        self.displayed = filter_by_min_rating(&self.all, threshold);
    }

    /// Apply every filter in `query` to the full listing.
    pub fn apply(&mut self, query: &ListingQuery, top_rated_threshold: f64) {
        let mut displayed = match query.search.as_deref() {
            Some(search) => filter_by_name(&self.all, search),
            None => self.all.as_ref().clone(),
        };
        if let Some(threshold) = query.rating_threshold(top_rated_threshold) {
            displayed = filter_by_min_rating(&displayed, threshold);
        }
        self.displayed = displayed;
    }

    /// Show the full listing again.
    pub fn reset(&mut self) {
        self.displayed = self.all.as_ref().clone();
    }
}
