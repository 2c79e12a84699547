//! Order Repository
//!
//! An append-only, order-preserving in-memory store. The only read is the most
//! recently added model.
//!
//! The sequence lives behind an `RwLock` so concurrent requests can add and
//! read without losing updates. Locks are never held across an await point.

use std::sync::{PoisonError, RwLock};

use crate::domain::model::Model;

/// Repository error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("repository is empty")]
    EmptyCollection,
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Storage contract used by the services
pub trait Repository<T: Model>: Send + Sync {
    /// Append a model. `None` and null models are rejected.
    fn add(&self, model: Option<T>) -> Result<()>;

    /// The most recently added model
    fn get(&self) -> Result<T>;
}

/// In-memory repository backed by a `Vec`
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    data: RwLock<Vec<T>>,
}

impl<T: Model> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored models
    pub fn len(&self) -> usize {
        // A panic while holding the lock cannot leave a Vec half-pushed
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Model> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Model> Repository<T> for InMemoryRepository<T> {
    fn add(&self, model: Option<T>) -> Result<()> {
        let model = match model {
            Some(model) if !model.is_null() => model,
            _ => {
                return Err(RepositoryError::InvalidArgument(
                    "Model cannot be null".to_string(),
                ));
            }
        };

        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.push(model);

        Ok(())
    }

    fn get(&self) -> Result<T> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        data.last().cloned().ok_or(RepositoryError::EmptyCollection)
    }
}
