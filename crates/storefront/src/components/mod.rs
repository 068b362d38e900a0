//! Page components.
//!
//! Each component is a plain function from props to an [`Element`]. Pages
//! that depend on fetched data take a [`LoadState`] and render the
//! [`shimmer`] skeleton until the data has arrived.

mod about;
mod body;
mod card;
mod cart;
mod contact;
mod error_page;
mod grocery;
mod header;
mod item_list;
mod restaurant_menu;
mod shimmer;

pub use about::{AboutProps, about, user, user_class};
pub use body::{BodyProps, body};
pub use card::card;
pub use cart::cart;
pub use contact::contact;
pub use error_page::{error_page, offline_notice};
pub use grocery::grocery;
pub use header::{HeaderProps, header};
pub use item_list::{ItemAction, item_list};
pub use restaurant_menu::{MenuProps, restaurant_category, restaurant_menu};
pub use shimmer::{SHIMMER_BLOCKS, shimmer};

use crate::view::Element;

/// Shown in place of a field the API left out.
pub const PLACEHOLDER: &str = "--";

/// Data a page is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
}

impl<T> LoadState<T> {
    #[must_use]
    pub const fn as_loaded(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Loaded(value) => Some(value),
        }
    }

    /// Render the skeleton until data is present, then `render` it.
    pub fn render_or_shimmer(&self, render: impl FnOnce(&T) -> Element) -> Element {
        match self {
            Self::Loading => shimmer(),
            Self::Loaded(value) => render(value),
        }
    }
}

impl<T> From<Option<T>> for LoadState<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Loading, Self::Loaded)
    }
}

/// Join a CDN prefix and an image id.
pub(crate) fn image_url(cdn_url: &str, image_id: &str) -> String {
    format!("{cdn_url}{image_id}")
}
