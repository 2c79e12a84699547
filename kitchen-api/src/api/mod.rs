//! API Module
//!
//! HTTP API layer for the Kitchen server.
//! Each submodule handles endpoints for a specific domain.

pub mod cupcake;
pub mod error;
pub mod health;
pub mod order;

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Largest accepted order body, matching the 30 MB default of the original host
pub const MAX_ORDER_BODY_BYTES: usize = 30_000_000;

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Order endpoints
        .route(
            "/api/order",
            get(order::get_order)
                .post(order::post_order)
                .layer(DefaultBodyLimit::max(MAX_ORDER_BODY_BYTES)),
        )
        // Catalog endpoints
        .route("/api/cupcakes", get(cupcake::list_cupcakes))
        .route("/api/cupcakes/{id}", get(cupcake::get_cupcake))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
