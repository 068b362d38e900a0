//! Restaurant menu command.

use food_villa_core::RestaurantId;

/// Fetch one restaurant's menu and log it by category.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the fetch fails.
pub async fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::client()?;
    let id = RestaurantId::new(id);

    tracing::info!("Fetching menu for restaurant {id}...");
    let menu = client.get_menu(&id).await?;

    tracing::info!(
        "{} | {} | {}",
        menu.name.as_deref().unwrap_or("Unnamed restaurant"),
        menu.cuisines.join(", "),
        menu.cost_for_two_message.as_deref().unwrap_or("--"),
    );

    for category in &menu.categories {
        tracing::info!("== {} ({}) ==", category.title, category.items.len());
        for item in &category.items {
            let price = item
                .price
                .map_or_else(|| "--".to_string(), |p| p.to_string());
            tracing::info!("  {} - {}", item.name, price);
        }
    }
    Ok(())
}
