//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with method, uri, status and latency)
//! 3. Request ID (recorded into the request span)

pub mod request_id;

pub use request_id::request_id_middleware;
