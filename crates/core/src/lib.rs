//! Food Villa Core - Shared domain types.
//!
//! This crate provides the types used across all Food Villa components:
//! - `storefront` - The restaurant-browsing site and its API clients
//! - `cli` - Command-line access to listings and menus
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no shared
//! state. Listing entries and menu items are immutable snapshots of whatever
//! the remote API last returned, so every field the API may omit is an
//! `Option` here and the rendering layer decides how to show its absence.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, prices, ratings, restaurants, menus and cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
