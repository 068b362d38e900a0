//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Restaurant listing (?search, ?top_rated, ?min_rating)
//! GET  /about                  - About page
//! GET  /contact                - Contact page
//! GET  /grocery                - Grocery page
//! GET  /restaurants/{res_id}   - Restaurant menu (?open=<index>|none)
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a menu item, redirect back to the menu
//! POST /cart/remove            - Remove an item (or the last added), redirect to cart
//! POST /cart/clear             - Empty the cart, redirect to cart
//!
//! # User
//! POST /user                   - Set the logged-in user's name
//!
//! # JSON API
//! GET  /api/cart               - Cart snapshot
//! GET  /api/connectivity       - Online status
//! POST /api/connectivity       - Deliver an online/offline event
//! ```
//!
//! Every page is an element tree wrapped in the app shell (header plus
//! outlet) and rendered through the `layout.html` template.

pub mod api;
pub mod cart;
pub mod home;
pub mod menu;
pub mod pages;
pub mod user;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    http::{HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use food_villa_core::RestaurantId;
use tracing::instrument;

use crate::components::{HeaderProps, error_page, header};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;
use crate::view::Element;

/// Page routes that the header links to, plus the restaurant detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Grocery,
    Cart,
    Restaurant(RestaurantId),
}

impl Route {
    /// Header navigation order.
    pub const NAV: [Self; 5] = [Self::Home, Self::About, Self::Contact, Self::Grocery, Self::Cart];

    /// Path for links to this route.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::Grocery => "/grocery".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::Restaurant(id) => format!("/restaurants/{id}"),
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Us",
            Self::Contact => "Contact Us",
            Self::Grocery => "Grocery",
            Self::Cart => "Cart",
            Self::Restaurant(_) => "Restaurant",
        }
    }
}

/// App shell template.
#[derive(Template, WebTemplate)]
#[template(path = "layout.html")]
pub struct PageTemplate {
    pub title: String,
    pub header: String,
    pub content: String,
}

/// Wrap page content in the app shell, reading header data from the store.
#[must_use]
pub fn render_page(
    state: &AppState,
    current: Option<&Route>,
    title: &str,
    content: &Element,
) -> PageTemplate {
    let (cart_count, user_name) = state
        .store()
        .select(|s| (s.cart.len(), s.user.logged_in_user.clone()));

    let header = header(HeaderProps {
        logo_url: &state.config().ui.logo_url,
        online: state.online().is_online(),
        cart_count,
        user_name: &user_name,
        current,
    });

    PageTemplate {
        title: title.to_string(),
        header: header.to_string(),
        content: content.to_string(),
    }
}

/// A 303 to `target`, which must be usable as a `Location` header.
///
/// # Errors
///
/// Returns `BadRequest` if `target` holds control characters.
pub fn redirect_to(target: &str) -> Result<Redirect> {
    HeaderValue::from_str(target)
        .map_err(|_| AppError::BadRequest("invalid redirect target".to_string()))?;
    Ok(Redirect::to(target))
}

/// Page for unknown paths.
#[instrument(skip(state))]
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route matched");
    let content = error_page(StatusCode::NOT_FOUND.as_u16(), "Not Found");
    (
        StatusCode::NOT_FOUND,
        render_page(&state, None, "Not Found", &content),
    )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(api::cart))
        .route(
            "/connectivity",
            get(api::connectivity).post(api::connectivity_event),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/grocery", get(pages::grocery))
        .route("/restaurants/{res_id}", get(menu::show))
        .route("/user", post(user::set_name))
        .nest("/cart", cart_routes())
        .nest("/api", api_routes())
        .fallback(not_found)
}
