//! Cupcake domain types

use serde::{Deserialize, Serialize};

/// A cupcake from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cupcake {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

impl Cupcake {
    pub fn new(id: u32, name: &str, description: &str, price: f64, image: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: image.to_string(),
        }
    }
}
