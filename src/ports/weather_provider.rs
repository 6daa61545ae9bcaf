//! Weather provider port.

use async_trait::async_trait;

use super::ProviderError;
use crate::domain::forecast::{Coordinates, CurrentConditions};

/// Port for fetching current weather conditions at a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current conditions at `coordinates`.
    async fn current_conditions(
        &self,
        coordinates: &Coordinates,
    ) -> Result<CurrentConditions, ProviderError>;
}
