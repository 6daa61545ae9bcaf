//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SLASHCAST_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use slashcast::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod providers;
mod secret;
mod server;

pub use error::{ConfigError, ValidationError};
pub use providers::ProviderConfig;
pub use secret::SecretConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the slashcast service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Shared-secret configuration (encrypted token + key service)
    #[serde(default)]
    pub secret: SecretConfig,

    /// Downstream provider configuration (geocoding, weather)
    #[serde(default)]
    pub providers: ProviderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SLASHCAST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SLASHCAST__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SLASHCAST__SECRET__KMS_ENCRYPTED_TOKEN=...` -> `secret.kms_encrypted_token = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SLASHCAST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid. An
    /// absent encrypted token passes validation by design (see [`SecretConfig`]).
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.secret.validate()?;
        self.providers.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
