//! Restaurant listing command.

use food_villa_core::Restaurant;
use food_villa_storefront::listing::{ListingQuery, ListingState};

/// Fetch the listing and log every entry that passes the filters.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the fetch fails.
pub async fn list(
    search: Option<&str>,
    min_rating: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::client()?;

    tracing::info!("Fetching restaurant listing...");
    let all = client.get_restaurants().await?;

    let query = ListingQuery {
        search: search.map(ToString::to_string),
        top_rated: None,
        min_rating,
    };
    let mut listing = ListingState::new(all);
    // `top_rated` is never set here, so the threshold argument is unused
    listing.apply(&query, 0.0);

    for restaurant in listing.displayed() {
        tracing::info!("{}", summary(restaurant));
    }
    tracing::info!(
        "{} of {} restaurants shown",
        listing.displayed().len(),
        listing.all().len()
    );
    Ok(())
}

fn summary(restaurant: &Restaurant) -> String {
    format!(
        "[{}] {} | {} | {} ★ | {} min",
        restaurant.id,
        restaurant.name.as_deref().unwrap_or("Unnamed restaurant"),
        restaurant.cuisines.join(", "),
        restaurant.rating_label().unwrap_or_else(|| "--".to_string()),
        restaurant
            .delivery_time_minutes
            .map_or_else(|| "--".to_string(), |m| m.to_string()),
    )
}
