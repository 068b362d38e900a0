pub mod menu;
pub mod restaurants;

use food_villa_storefront::config::FoodVillaConfig;
use food_villa_storefront::swiggy::SwiggyClient;

/// Build a restaurant API client from the environment.
pub fn client() -> Result<SwiggyClient, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = FoodVillaConfig::from_env()?;
    Ok(SwiggyClient::new(&config.api)?)
}
