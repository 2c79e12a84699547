//! Order API Handlers
//!
//! HTTP endpoints for placing and reading orders.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::service::order_service;
use crate::state::AppState;

/// GET /api/order
/// Get the most recently placed order
pub async fn get_order(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    tracing::debug!("Getting latest order");

    let order = order_service::latest_order(state.orders.as_ref())
        .ok_or_else(|| ApiError::NotFound("No orders have been placed".to_string()))?;

    Ok(Json(order))
}

/// POST /api/order
/// Place an order. Always answers 200; the body is `true` when the order was
/// stored and `false` otherwise, including when the body cannot be read.
pub async fn post_order(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Json<bool> {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Order body rejected: {}", e);
            return Json(false);
        }
    };

    let model = parse_model(&body);

    match order_service::add_order(state.orders.as_ref(), model) {
        Ok(()) => Json(true),
        Err(e) => {
            tracing::warn!("Order rejected: {:?}", e);
            Json(false)
        }
    }
}

/// An empty or malformed body binds to no model at all
fn parse_model(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Order body is not valid JSON: {}", e);
            None
        }
    }
}
