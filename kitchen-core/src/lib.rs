//! Kitchen Core
//!
//! Core types and abstractions for the Kitchen order API.
//!
//! This crate contains:
//! - Domain types: Catalog entities (Cupcake) and the `Model` contract
//! - Seed: The static cupcake catalog
//! - Repository: The in-memory order store

pub mod domain;
pub mod repository;
pub mod seed;
