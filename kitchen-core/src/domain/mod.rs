//! Core domain types
//!
//! This module contains the domain structures shared by the Kitchen services.
//! Orders themselves carry no schema; anything implementing [`model::Model`]
//! can be stored.

pub mod cupcake;
pub mod model;
