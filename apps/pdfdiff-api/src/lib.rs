//! PDF Diff API - HTTP wrapper around the comparison engine
//!
//! Exposes the router so integration tests can drive it without binding a
//! socket.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod models;

/// Build the application router with CORS and request tracing.
pub fn app() -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Comparison endpoint
        .route("/compare", post(handlers::compare))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
