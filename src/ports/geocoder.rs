//! Geocoder port for the location-resolution provider.

use async_trait::async_trait;

use super::ProviderError;
use crate::domain::forecast::GeoResult;

/// Port for resolving a free-text location query to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `address` to candidate results, best match first.
    ///
    /// An empty vector is a valid answer (the query matched nothing); only
    /// transport-level trouble is an error.
    async fn geocode(&self, address: &str) -> Result<Vec<GeoResult>, ProviderError>;
}
