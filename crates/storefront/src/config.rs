//! Storefront configuration loaded from environment variables.
//!
//! Every variable is optional; unset variables fall back to the values in
//! [`FoodVillaConfig::default`].
//!
//! # Environment Variables
//!
//! ## Server
//! - `FOOD_VILLA_HOST` - Bind address (default: 127.0.0.1)
//! - `FOOD_VILLA_PORT` - Listen port (default: 1234)
//! - `FOOD_VILLA_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//!
//! ## Restaurant API
//! - `FOOD_VILLA_LISTING_URL` - Restaurant listing endpoint (location baked into the query)
//! - `FOOD_VILLA_MENU_URL` - Menu endpoint; `restaurantId` is appended per request
//! - `FOOD_VILLA_CDN_URL` - Image CDN prefix for restaurant and dish images
//! - `FOOD_VILLA_CACHE_TTL_SECS` - How long a fetched listing/menu is reused (default: 300)
//!
//! ## UI
//! - `FOOD_VILLA_LOGO_URL` - Header logo
//! - `FOOD_VILLA_DEFAULT_USER` - Logged-in user placeholder (default: Default User)
//! - `FOOD_VILLA_TOP_RATED_THRESHOLD` - Minimum rating for "Top Rated" (default: 4.5)
//!
//! ## Profile (About page)
//! - `GITHUB_API_URL` - GitHub REST API base (default: <https://api.github.com>)
//! - `GITHUB_PROFILE_LOGIN` - Account shown on the About page
//! - `GITHUB_TOKEN` - Optional token to lift anonymous rate limits
//!
//! ## Error tracking
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_LISTING_URL: &str = "https://www.swiggy.com/dapi/restaurants/list/v5?lat=30.3164945&lng=78.03219179999999&is-seo-homepage-enabled=true&page_type=DESKTOP_WEB_LISTING";
const DEFAULT_MENU_URL: &str = "https://www.swiggy.com/dapi/menu/pl?page-type=REGULAR_MENU&complete-menu=true&lat=30.3164945&lng=78.03219179999999";
const DEFAULT_CDN_URL: &str =
    "https://media-assets.swiggy.com/swiggy/image/upload/fl_lossy,f_auto,q_auto,w_660/";
const DEFAULT_LOGO_URL: &str =
    "https://img.freepik.com/premium-vector/food-villa-logo-design_1287271-35.jpg";
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct FoodVillaConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Restaurant API configuration
    pub api: RestaurantApiConfig,
    /// Page rendering configuration
    pub ui: UiConfig,
    /// GitHub profile configuration for the About page
    pub github: GithubConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Restaurant listing and menu endpoints.
#[derive(Debug, Clone)]
pub struct RestaurantApiConfig {
    /// Listing-by-location endpoint
    pub listing_url: Url,
    /// Menu endpoint; the restaurant id is appended as `restaurantId`
    pub menu_url: Url,
    /// Image CDN prefix
    pub cdn_url: String,
    /// Time-to-live for cached API responses
    pub cache_ttl: Duration,
}

/// Static page content settings.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Header logo URL
    pub logo_url: String,
    /// Initial logged-in user name
    pub default_user: String,
    /// Minimum rating for the "Top Rated Restaurants" filter
    pub top_rated_threshold: f64,
}

/// GitHub REST API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct GithubConfig {
    /// API base URL
    pub api_url: Url,
    /// Login of the profile shown on the About page
    pub profile_login: String,
    /// Optional API token
    pub token: Option<SecretString>,
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_url", &self.api_url.as_str())
            .field("profile_login", &self.profile_login)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for FoodVillaConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 1234,
            static_dir: PathBuf::from("crates/storefront/static"),
            api: RestaurantApiConfig::default(),
            ui: UiConfig::default(),
            github: GithubConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl Default for RestaurantApiConfig {
    #[allow(clippy::expect_used)] // compile-time constants
    fn default() -> Self {
        Self {
            listing_url: Url::parse(DEFAULT_LISTING_URL).expect("default listing URL is valid"),
            menu_url: Url::parse(DEFAULT_MENU_URL).expect("default menu URL is valid"),
            cdn_url: DEFAULT_CDN_URL.to_string(),
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            logo_url: DEFAULT_LOGO_URL.to_string(),
            default_user: "Default User".to_string(),
            top_rated_threshold: 4.5,
        }
    }
}

impl Default for GithubConfig {
    #[allow(clippy::expect_used)] // compile-time constant
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_GITHUB_API_URL).expect("default GitHub URL is valid"),
            profile_login: "1998amansinha".to_string(),
            token: None,
        }
    }
}

impl FoodVillaConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed, or if
    /// the GitHub token looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        Ok(Self {
            host: parse_env_or("FOOD_VILLA_HOST", defaults.host)?,
            port: parse_env_or("FOOD_VILLA_PORT", defaults.port)?,
            static_dir: get_optional_env("FOOD_VILLA_STATIC_DIR")
                .map_or(defaults.static_dir, PathBuf::from),
            api: RestaurantApiConfig::from_env(defaults.api)?,
            ui: UiConfig::from_env(defaults.ui)?,
            github: GithubConfig::from_env(defaults.github)?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl RestaurantApiConfig {
    fn from_env(defaults: Self) -> Result<Self, ConfigError> {
        Ok(Self {
            listing_url: parse_env_or("FOOD_VILLA_LISTING_URL", defaults.listing_url)?,
            menu_url: parse_env_or("FOOD_VILLA_MENU_URL", defaults.menu_url)?,
            cdn_url: get_optional_env("FOOD_VILLA_CDN_URL").unwrap_or(defaults.cdn_url),
            cache_ttl: parse_env_or::<u64>(
                "FOOD_VILLA_CACHE_TTL_SECS",
                defaults.cache_ttl.as_secs(),
            )
            .map(Duration::from_secs)?,
        })
    }
}

impl UiConfig {
    fn from_env(defaults: Self) -> Result<Self, ConfigError> {
        let top_rated_threshold =
            parse_env_or("FOOD_VILLA_TOP_RATED_THRESHOLD", defaults.top_rated_threshold)?;
        if !(0.0..=5.0).contains(&top_rated_threshold) {
            return Err(ConfigError::InvalidEnvVar(
                "FOOD_VILLA_TOP_RATED_THRESHOLD".to_string(),
                format!("{top_rated_threshold} is outside 0..=5"),
            ));
        }

        Ok(Self {
            logo_url: get_optional_env("FOOD_VILLA_LOGO_URL").unwrap_or(defaults.logo_url),
            default_user: get_optional_env("FOOD_VILLA_DEFAULT_USER")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.default_user),
            top_rated_threshold,
        })
    }
}

impl GithubConfig {
    fn from_env(defaults: Self) -> Result<Self, ConfigError> {
        let token = match get_optional_env("GITHUB_TOKEN") {
            Some(value) => {
                validate_secret_strength(&value, "GITHUB_TOKEN")?;
                Some(SecretString::from(value))
            }
            None => None,
        };

        Ok(Self {
            api_url: parse_env_or("GITHUB_API_URL", defaults.api_url)?,
            profile_login: get_optional_env("GITHUB_PROFILE_LOGIN")
                .unwrap_or(defaults.profile_login),
            token,
        })
    }

    /// Token value for the `Authorization` header, if configured.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose_secret()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |value| parse_value(key, &value))
}

/// Parse a raw value, naming the variable in the error.
fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
