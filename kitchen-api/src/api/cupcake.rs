//! Cupcake API Handlers
//!
//! HTTP endpoints for the cupcake catalog.

use axum::{Json, extract::Path};
use kitchen_core::domain::cupcake::Cupcake;

use crate::api::error::ApiResult;
use crate::service::catalog_service;

/// GET /api/cupcakes
/// List all cupcakes
pub async fn list_cupcakes() -> Json<Vec<Cupcake>> {
    tracing::debug!("Listing cupcakes");

    Json(catalog_service::list_cupcakes())
}

/// GET /api/cupcakes/{id}
/// Get cupcake by ID
pub async fn get_cupcake(Path(id): Path<u32>) -> ApiResult<Json<Cupcake>> {
    tracing::debug!("Getting cupcake: {}", id);

    let cupcake = catalog_service::get_cupcake(id)?;

    Ok(Json(cupcake))
}
