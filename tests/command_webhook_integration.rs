//! Integration tests for the slash-command webhook.
//!
//! These tests run the real router against live HTTP doubles:
//! 1. The key service, geocoder, and weather provider are wiremock servers
//! 2. The app listens on an ephemeral port and is driven with a real client
//! 3. Assertions cover the wire contract end to end

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use slashcast::bootstrap::build_router;
use slashcast::config::{AppConfig, ProviderConfig, SecretConfig};

const SECRET: &str = "gIkuvaNzQIHg97ATvDxqgjtO";

const GOLDEN_REPLY: &str = "*Clear in Paris, France*\n\n\
     :thermometer:*Temperature:* 68 F\n\
     :umbrella_with_rain_drops:*Precipitation:* 12%\n\
     :sweat_drops:*Humidity:* 55%\n\
     :wind_blowing_face:*Wind:* 7.3 mph\n\
     :compression:*Pressure:* 1013 mb\n";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestHarness {
    kms: MockServer,
    geocode: MockServer,
    weather: MockServer,
    base_url: String,
    client: reqwest::Client,
}

impl TestHarness {
    /// Start the doubles and the app, with the encrypted token configured.
    async fn start() -> Self {
        Self::start_with_token(Some(BASE64.encode(b"opaque ciphertext"))).await
    }

    async fn start_with_token(encrypted_token: Option<String>) -> Self {
        let kms = MockServer::start().await;
        let geocode = MockServer::start().await;
        let weather = MockServer::start().await;

        let config = AppConfig {
            secret: SecretConfig {
                kms_encrypted_token: encrypted_token,
                kms_endpoint: Some(kms.uri()),
            },
            providers: ProviderConfig {
                geocoding_base_url: geocode.uri(),
                weather_base_url: weather.uri(),
                weather_api_key: Some("test-forecast-key".to_string()),
                request_timeout_secs: 5,
            },
            ..Default::default()
        };
        config.validate().expect("test config must validate");

        let app = build_router(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server run");
        });

        Self {
            kms,
            geocode,
            weather,
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    async fn mock_kms_decrypt(&self, expected_calls: u64) {
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "Plaintext": BASE64.encode(SECRET) })),
            )
            .expect(expected_calls)
            .mount(&self.kms)
            .await;
    }

    async fn mock_geocode_paris(&self) {
        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "formatted_address": "Paris, France",
                    "geometry": { "location": { "lat": 48.8566, "lng": 2.3522 } }
                }],
                "status": "OK"
            })))
            .mount(&self.geocode)
            .await;
    }

    async fn mock_weather_clear(&self) {
        Mock::given(method("GET"))
            .and(path_regex("^/forecast/test-forecast-key/.*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "currently": {
                    "summary": "Clear",
                    "temperature": 68.7,
                    "precipProbability": 0.12,
                    "humidity": 0.55,
                    "windSpeed": 7.25,
                    "pressure": 1013.4
                }
            })))
            .mount(&self.weather)
            .await;
    }

    async fn post_command(&self, token: &str, text: &str) -> reqwest::Response {
        let body = serde_urlencoded::to_string([
            ("token", token),
            ("user_name", "jane"),
            ("command", "/weather"),
            ("channel_name", "general"),
            ("text", text),
        ])
        .expect("encode form body");

        self.client
            .post(format!("{}/slack/command", self.base_url))
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("request completes")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn valid_invocation_returns_the_rendered_forecast() {
    let harness = TestHarness::start().await;
    harness.mock_kms_decrypt(1).await;
    harness.mock_geocode_paris().await;
    harness.mock_weather_clear().await;

    let response = harness.post_command(SECRET, "Paris").await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["response_type"], "in_channel");
    assert_eq!(body["text"], GOLDEN_REPLY);
}

#[tokio::test]
async fn invalid_token_is_rejected_without_any_provider_call() {
    let harness = TestHarness::start().await;
    harness.mock_kms_decrypt(1).await;

    // Providers must never be reached for an unauthenticated request.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.geocode)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.weather)
        .await;

    let response = harness.post_command("intruder-token", "Paris").await;

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Invalid request token");
}

#[tokio::test]
async fn unknown_location_yields_not_found_and_skips_the_weather_call() {
    let harness = TestHarness::start().await;
    harness.mock_kms_decrypt(1).await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [],
            "status": "ZERO_RESULTS"
        })))
        .mount(&harness.geocode)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.weather)
        .await;

    let response = harness.post_command(SECRET, "xqzvnt").await;

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Location not found.");
}

#[tokio::test]
async fn the_secret_is_decrypted_once_across_invocations() {
    let harness = TestHarness::start().await;
    harness.mock_kms_decrypt(1).await;
    harness.mock_geocode_paris().await;
    harness.mock_weather_clear().await;

    for _ in 0..3 {
        let response = harness.post_command(SECRET, "Paris").await;
        assert_eq!(response.status(), 200);
    }
    // The expect(1) on the decrypt mock is verified when the server drops.
}

#[tokio::test]
async fn unconfigured_token_answers_every_invocation_with_400() {
    let harness = TestHarness::start_with_token(None).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.kms)
        .await;

    let response = harness.post_command(SECRET, "Paris").await;

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Token has not been set.");
}

#[tokio::test]
async fn failing_key_service_surfaces_a_decrypt_error() {
    let harness = TestHarness::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&harness.kms)
        .await;

    let response = harness.post_command(SECRET, "Paris").await;

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "Unable to decrypt the request token"
    );
}

#[tokio::test]
async fn geocode_query_preserves_the_free_text_address() {
    let harness = TestHarness::start().await;
    harness.mock_kms_decrypt(1).await;
    harness.mock_weather_clear().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("address", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "formatted_address": "New York, NY, USA",
                "geometry": { "location": { "lat": 40.7127753, "lng": -74.0059728 } }
            }],
            "status": "OK"
        })))
        .expect(1)
        .mount(&harness.geocode)
        .await;

    let response = harness.post_command(SECRET, "New York").await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["text"].as_str().unwrap().contains("New York, NY, USA"));
}

#[tokio::test]
async fn unavailable_weather_provider_maps_to_its_stage_message() {
    let harness = TestHarness::start().await;
    harness.mock_kms_decrypt(1).await;
    harness.mock_geocode_paris().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("over capacity"))
        .mount(&harness.weather)
        .await;

    let response = harness.post_command(SECRET, "Paris").await;

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "The weather service is unavailable"
    );
}

#[tokio::test]
async fn malformed_body_is_rejected_with_400_rather_than_a_crash() {
    let harness = TestHarness::start().await;
    harness.mock_kms_decrypt(1).await;

    let response = harness
        .client
        .post(format!("{}/slack/command", harness.base_url))
        .header("content-type", "application/json")
        .body(r#"{"token": "whatever"}"#)
        .send()
        .await
        .expect("request completes");

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Invalid request token");
}
