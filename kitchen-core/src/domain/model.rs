//! Model contract
//!
//! A model is any value a caller hands to the repository. There is no schema;
//! the only thing the repository asks of a model is whether it represents a
//! null value, which it refuses to store.

/// A value that can be stored in a [`crate::repository::Repository`]
pub trait Model: Clone + Send + Sync + 'static {
    /// Returns true when this value stands for "no model"
    fn is_null(&self) -> bool {
        false
    }
}

impl Model for serde_json::Value {
    fn is_null(&self) -> bool {
        self.is_null()
    }
}

impl Model for String {}
impl Model for i32 {}
impl Model for i64 {}
