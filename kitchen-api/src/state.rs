//! Application state shared by the axum handlers.

use std::sync::Arc;

use kitchen_core::repository::{InMemoryRepository, Repository};
use serde_json::Value;

use crate::config::Config;
use crate::service::order_service;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Order store, one per process.
    pub orders: Arc<dyn Repository<Value>>,
}

impl AppState {
    /// Builds the state with a fresh in-memory repository and runs the
    /// startup seed hook.
    pub fn new(config: &Config) -> Self {
        let orders: Arc<dyn Repository<Value>> = Arc::new(InMemoryRepository::<Value>::new());
        order_service::seed_orders(orders.as_ref(), config.seed_order.as_deref());

        Self { orders }
    }

    /// State around an existing repository, without seeding.
    pub fn with_repository(orders: Arc<dyn Repository<Value>>) -> Self {
        Self { orders }
    }
}
