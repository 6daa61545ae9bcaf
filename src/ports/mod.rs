//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SecretDecryptor` - key-management service that decrypts the token
//! - `Geocoder` - free-text location resolution
//! - `WeatherProvider` - current conditions by coordinates

mod geocoder;
mod secret_decryptor;
mod weather_provider;

pub use geocoder::Geocoder;
pub use secret_decryptor::{DecryptError, SecretDecryptor};
pub use weather_provider::WeatherProvider;

use thiserror::Error;

/// Errors from the downstream HTTP providers, normalized to one shape.
///
/// The upstream clients fail in different ways (connect errors, bad
/// statuses, bodies that don't parse); every one of them collapses into a
/// variant here before the orchestrator tags it with the failing stage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The request never completed.
    #[error("Request failed: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider answered 2xx with a body we could not interpret.
    #[error("Malformed response body: {0}")]
    Malformed(String),
}
