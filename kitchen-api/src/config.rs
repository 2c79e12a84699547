//! Server configuration
//!
//! Defines the configurable parameters of the Kitchen API server.

use std::env::VarError;
use std::net::SocketAddr;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Order added to the repository at startup unless overridden
pub const DEFAULT_SEED_ORDER: &str = "bar";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (e.g., "0.0.0.0:8080")
    pub bind_addr: String,

    /// Order added to the repository when the state is built.
    /// `None` starts with an empty repository.
    pub seed_order: Option<String>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            seed_order: Some(DEFAULT_SEED_ORDER.to_string()),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - KITCHEN_BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - KITCHEN_SEED_ORDER (optional, default: "bar", empty disables seeding)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("KITCHEN_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let seed_order = seed_order_from(std::env::var("KITCHEN_SEED_ORDER"))?;

        let config = Self {
            bind_addr,
            seed_order,
        };
        config.validate()?;

        Ok(config)
    }

    /// Sets the startup seed order
    pub fn with_seed_order(mut self, seed_order: Option<String>) -> Self {
        self.seed_order = seed_order;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("bind_addr '{}' is not a valid socket address", self.bind_addr);
        }

        Ok(())
    }
}

/// Interprets the raw KITCHEN_SEED_ORDER lookup. An empty value disables
/// seeding and an unset one falls back to the default.
fn seed_order_from(var: Result<String, VarError>) -> anyhow::Result<Option<String>> {
    match var {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(Some(DEFAULT_SEED_ORDER.to_string())),
        Err(e) => anyhow::bail!("KITCHEN_SEED_ORDER is not valid unicode: {}", e),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
