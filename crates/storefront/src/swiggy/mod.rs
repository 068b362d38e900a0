//! Restaurant listing and menu API client.
//!
//! # Architecture
//!
//! - Plain `GET` requests with `reqwest`; responses are parsed into
//!   `serde_json::Value` and walked with optional-path navigation, because the
//!   upstream payload is a deeply nested, loosely versioned card layout
//! - In-memory caching via `moka` (TTL from configuration); a successful fetch
//!   replaces the cached snapshot wholesale, a failed fetch caches nothing
//! - No retries, no request timeouts
//!
//! # Example
//!
//! ```rust,ignore
//! use food_villa_storefront::swiggy::SwiggyClient;
//!
//! let client = SwiggyClient::new(&config.api)?;
//! let restaurants = client.get_restaurants().await?;
//! let menu = client.get_menu(&restaurants[0].id).await?;
//! ```

mod cache;
mod client;
pub mod conversions;

pub use client::SwiggyClient;

use thiserror::Error;

/// Errors that can occur when talking to the restaurant API.
#[derive(Debug, Error)]
pub enum SwiggyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response parsed but lacked the section we navigate to.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swiggy_error_display() {
        let err = SwiggyError::Api {
            status: 403,
            message: "blocked".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 403 - blocked");

        let err = SwiggyError::UnexpectedShape("no restaurant grid".to_string());
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: no restaurant grid"
        );
    }
}
