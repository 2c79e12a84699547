//! Service Module
//!
//! Business logic layer for the Kitchen API.
//! Services sit between the HTTP handlers and the repository.

pub mod catalog;
pub mod order;

// Re-export for convenience
pub use catalog as catalog_service;
pub use order as order_service;
