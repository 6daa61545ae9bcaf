//! Dark Sky forecast client.
//!
//! The API key travels as a path segment, so request URLs must never be
//! logged verbatim.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::domain::forecast::{Coordinates, CurrentConditions};
use crate::ports::{ProviderError, WeatherProvider};

/// Configuration for the Dark Sky client.
#[derive(Debug, Clone)]
pub struct DarkSkyConfig {
    pub base_url: String,
    pub api_key: Secret<String>,
    pub timeout_secs: u64,
}

impl DarkSkyConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Secret::new(api_key.into()),
            timeout_secs: 10,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    currently: CurrentlyBlock,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentlyBlock {
    summary: String,
    temperature: f64,
    precip_probability: f64,
    humidity: f64,
    wind_speed: f64,
    pressure: f64,
}

/// [`WeatherProvider`] backed by the Dark Sky forecast API.
pub struct DarkSkyClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Secret<String>,
}

impl DarkSkyClient {
    pub fn new(config: DarkSkyConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }
}

#[async_trait]
impl WeatherProvider for DarkSkyClient {
    async fn current_conditions(
        &self,
        coordinates: &Coordinates,
    ) -> Result<CurrentConditions, ProviderError> {
        debug!(
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "Calling weather provider"
        );

        let url = format!(
            "{}/forecast/{}/{},{}",
            self.base_url,
            self.api_key.expose_secret(),
            coordinates.latitude,
            coordinates.longitude
        );

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

        let parsed: ForecastResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        Ok(CurrentConditions {
            summary: parsed.currently.summary,
            temperature: parsed.currently.temperature,
            precip_probability: parsed.currently.precip_probability,
            humidity: parsed.currently.humidity,
            wind_speed: parsed.currently.wind_speed,
            pressure: parsed.currently.pressure,
        })
    }
}
