//! Adapters - concrete implementations of the ports.
//!
//! - `http` - inbound webhook surface (axum)
//! - `kms` - key-management decrypt client
//! - `geocoding` - Google Maps geocode client
//! - `weather` - Dark Sky forecast client

pub mod geocoding;
pub mod http;
pub mod kms;
pub mod weather;
