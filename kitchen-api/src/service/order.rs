//! Order Service
//!
//! Business logic for placing and reading orders.

use kitchen_core::repository::Repository;
use serde_json::Value;

/// Service error type
#[derive(Debug, PartialEq)]
pub enum OrderError {
    InvalidOrder(String),
}

pub type Result<T> = std::result::Result<T, OrderError>;

/// Place a new order
pub fn add_order(repository: &dyn Repository<Value>, model: Option<Value>) -> Result<()> {
    repository
        .add(model)
        .map_err(|e| OrderError::InvalidOrder(e.to_string()))?;

    tracing::info!("Order accepted");

    Ok(())
}

/// Get the most recently placed order, `None` before the first one
pub fn latest_order(repository: &dyn Repository<Value>) -> Option<Value> {
    repository.get().ok()
}

/// Startup hook: place the configured seed order
pub fn seed_orders(repository: &dyn Repository<Value>, seed: Option<&str>) {
    let Some(seed) = seed else {
        tracing::debug!("No seed order configured");
        return;
    };

    match repository.add(Some(Value::String(seed.to_string()))) {
        Ok(()) => tracing::info!("Seeded order repository with {:?}", seed),
        Err(e) => tracing::warn!("Failed to seed order repository: {}", e),
    }
}
