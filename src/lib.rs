//! Dynamic pricing engine for tour and activity operators.
//!
//! Computes the final bookable per-guest price for an experience from a
//! base price, an ordered set of conditional adjustment rules (seasonal,
//! group size, early bird, last minute), a currency table, and the booking
//! context. Exposed both as a library (`pricing::compute_quote`) and as a
//! small stateless HTTP/JSON service consumed by the booking widget and
//! the admin rule editor.

pub mod error;
pub mod pricing;

pub use error::{AppError, Result};

use axum::Router;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Build the application router with middleware applied.
///
/// The booking widget calls in from operator-hosted pages, so CORS is
/// permissive. Scenario matrix responses are the large ones; gzip covers
/// them.
pub fn app() -> Router {
    Router::new()
        .merge(pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}
