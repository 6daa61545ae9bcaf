//! Downstream provider configuration (geocoding + weather)

use serde::Deserialize;

use super::error::ValidationError;

/// Provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the geocoding provider
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Base URL of the weather provider
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,

    /// Weather provider API credential (path segment of the forecast URL)
    pub weather_api_key: Option<String>,

    /// Per-request timeout for provider calls, in seconds
    #[serde(default = "default_provider_timeout")]
    pub request_timeout_secs: u64,
}

impl ProviderConfig {
    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.geocoding_base_url.starts_with("http") {
            return Err(ValidationError::InvalidProviderUrl("geocoding_base_url"));
        }
        if !self.weather_base_url.starts_with("http") {
            return Err(ValidationError::InvalidProviderUrl("weather_base_url"));
        }
        match self.weather_api_key.as_deref() {
            None | Some("") => return Err(ValidationError::MissingRequired("WEATHER_API_KEY")),
            Some(_) => {}
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            weather_base_url: default_weather_base_url(),
            weather_api_key: None,
            request_timeout_secs: default_provider_timeout(),
        }
    }
}

fn default_geocoding_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.darksky.net".to_string()
}

fn default_provider_timeout() -> u64 {
    10
}
