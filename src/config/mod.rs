//! Application configuration module
//!
//! Configuration is read from environment variables with the
//! `VIDEO_CATALOG` prefix; nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use video_catalog::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod server;

pub use database::{DatabaseConfig, DatabaseVendor};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, middleware)
    #[serde(default)]
    pub server: ServerConfig,

    /// Repository backend and PostgreSQL pool
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `VIDEO_CATALOG__*` variables:
    ///
    /// - `VIDEO_CATALOG__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VIDEO_CATALOG__DATABASE__VENDOR=memory` -> `database.vendor = memory`
    /// - `VIDEO_CATALOG__DATABASE__URL=...` -> `database.url = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VIDEO_CATALOG")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
