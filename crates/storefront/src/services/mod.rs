//! Third-party services used by the storefront pages.
//!
//! # Services
//!
//! - `github` - Public profile lookup for the About page

pub mod github;

pub use github::{GithubClient, GithubError, Profile};
