//! Catalog Service
//!
//! Read-only access to the cupcake seed catalog.

use kitchen_core::domain::cupcake::Cupcake;
use kitchen_core::seed;

/// Service error type
#[derive(Debug, PartialEq)]
pub enum CatalogError {
    NotFound(u32),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// List all cupcakes
pub fn list_cupcakes() -> Vec<Cupcake> {
    seed::catalog().to_vec()
}

/// Get a cupcake by ID
pub fn get_cupcake(id: u32) -> Result<Cupcake> {
    let cupcake = seed::find_cupcake(id).ok_or(CatalogError::NotFound(id))?;
    Ok(cupcake.clone())
}
