//! Kitchen API
//!
//! HTTP server exposing the in-memory order repository and the cupcake
//! catalog.

pub mod api;
pub mod config;
pub mod service;
pub mod state;
