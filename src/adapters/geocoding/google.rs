//! Google Maps geocoding client.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::domain::forecast::{Coordinates, GeoResult};
use crate::ports::{Geocoder, ProviderError};

/// Configuration for the Google geocoding client.
#[derive(Debug, Clone)]
pub struct GoogleGeocoderConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GoogleGeocoderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 10,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeEntry>,
}

#[derive(Debug, Deserialize)]
struct GeocodeEntry {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

/// [`Geocoder`] backed by the Google Maps geocode API.
pub struct GoogleGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleGeocoder {
    pub fn new(config: GoogleGeocoderConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url,
        }
    }

    fn geocode_url(&self, address: &str) -> String {
        format!(
            "{}/maps/api/geocode/json?address={}",
            self.base_url,
            encode_address(address)
        )
    }
}

/// Replaces spaces with `%20` and nothing else, matching what the upstream
/// API accepts for free-text queries.
fn encode_address(address: &str) -> String {
    address.replace(' ', "%20")
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeoResult>, ProviderError> {
        let url = self.geocode_url(address);
        debug!(%url, "Calling geocode provider");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        Ok(parsed
            .results
            .into_iter()
            .map(|entry| GeoResult {
                formatted_address: entry.formatted_address,
                coordinates: Coordinates {
                    latitude: entry.geometry.location.lat,
                    longitude: entry.geometry.location.lng,
                },
            })
            .collect())
    }
}
