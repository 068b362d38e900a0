//! GitHub REST API client for the About page profile card.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::GithubConfig;

/// GitHub API version header value.
const API_VERSION: &str = "2022-11-28";

/// GitHub requires a user agent on every request.
const USER_AGENT: &str = "food-villa-storefront";

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GithubError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to build a request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// The subset of a GitHub user the profile card shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

/// GitHub API client.
#[derive(Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    api_url: Url,
}

impl GithubClient {
    /// Create a new GitHub API client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &GithubConfig) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        if let Some(bearer) = config.bearer_token() {
            let mut value = HeaderValue::from_str(&bearer)
                .map_err(|e| GithubError::InvalidRequest(format!("Invalid token format: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// URL of a user's profile resource.
    ///
    /// # Errors
    ///
    /// Returns error if the login cannot form a URL path.
    pub fn user_url(&self, login: &str) -> Result<Url, GithubError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| GithubError::InvalidRequest("API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["users", login]);
        Ok(url)
    }

    /// Fetch a user's public profile.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the API answers with an error.
    #[instrument(skip(self))]
    pub async fn get_user(&self, login: &str) -> Result<Profile, GithubError> {
        let response = self.client.get(self.user_url(login)?).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GithubError::Api {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        Ok(response.json().await?)
    }
}
