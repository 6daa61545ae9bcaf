//! Wires configuration into the adapter graph and the router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::geocoding::{GoogleGeocoder, GoogleGeocoderConfig};
use crate::adapters::http::command::{command_routes, CommandAppState};
use crate::adapters::kms::{HttpKmsClient, KmsConfig};
use crate::adapters::weather::{DarkSkyClient, DarkSkyConfig};
use crate::application::{CommandOrchestrator, ProcessCommandHandler, SecretCache};
use crate::config::AppConfig;
use crate::ports::{Geocoder, SecretDecryptor, WeatherProvider};

/// Builds the full application router from validated configuration.
pub fn build_router(config: &AppConfig) -> Router {
    // The endpoint is empty only when no token is configured, and then the
    // decryptor is never invoked.
    let decryptor: Arc<dyn SecretDecryptor> = Arc::new(HttpKmsClient::new(
        KmsConfig::new(config.secret.kms_endpoint.clone().unwrap_or_default())
            .with_timeout(config.providers.request_timeout_secs),
    ));

    let secret_cache = Arc::new(SecretCache::new(
        config.secret.encrypted_token().map(str::to_owned),
        decryptor,
    ));

    let geocoder: Arc<dyn Geocoder> = Arc::new(GoogleGeocoder::new(
        GoogleGeocoderConfig::new(config.providers.geocoding_base_url.clone())
            .with_timeout(config.providers.request_timeout_secs),
    ));

    // Validation rejects an absent key before this runs.
    let weather: Arc<dyn WeatherProvider> = Arc::new(DarkSkyClient::new(
        DarkSkyConfig::new(
            config.providers.weather_base_url.clone(),
            config.providers.weather_api_key.clone().unwrap_or_default(),
        )
        .with_timeout(config.providers.request_timeout_secs),
    ));

    let orchestrator = Arc::new(CommandOrchestrator::new(geocoder, weather));
    let handler = Arc::new(ProcessCommandHandler::new(secret_cache, orchestrator));

    Router::new()
        .nest("/slack", command_routes(CommandAppState { handler }))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}
