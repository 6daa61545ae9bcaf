//! HTTP client for the KMS decrypt API.
//!
//! Speaks the JSON decrypt protocol: one POST per call with the ciphertext
//! base64-encoded in the body, plaintext base64-encoded in the reply. The
//! caller caches the result, so this client stays connectionless and cheap.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::ports::{DecryptError, SecretDecryptor};

const DECRYPT_TARGET: &str = "TrentService.Decrypt";

/// Configuration for the KMS HTTP client.
#[derive(Debug, Clone)]
pub struct KmsConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl KmsConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: 10,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[derive(Serialize)]
struct DecryptRequest {
    #[serde(rename = "CiphertextBlob")]
    ciphertext_blob: String,
}

#[derive(Deserialize)]
struct DecryptResponse {
    #[serde(rename = "Plaintext")]
    plaintext: String,
}

/// [`SecretDecryptor`] backed by the KMS decrypt endpoint.
pub struct HttpKmsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpKmsClient {
    pub fn new(config: KmsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint,
        }
    }
}

#[async_trait]
impl SecretDecryptor for HttpKmsClient {
    async fn decrypt(&self, cipher_blob: &[u8]) -> Result<Vec<u8>, DecryptError> {
        debug!(endpoint = %self.endpoint, "Calling KMS decrypt");

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Amz-Target", DECRYPT_TARGET)
            .json(&DecryptRequest {
                ciphertext_blob: BASE64.encode(cipher_blob),
            })
            .send()
            .await
            .map_err(|e| DecryptError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DecryptError::Rejected(format!("status {status}: {body}")));
        }

        let decrypted: DecryptResponse = response
            .json()
            .await
            .map_err(|e| DecryptError::Malformed(e.to_string()))?;

        BASE64
            .decode(decrypted.plaintext)
            .map_err(|e| DecryptError::Malformed(format!("plaintext is not valid base64: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_ten_second_timeout() {
        let config = KmsConfig::new("http://localhost:4566");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.with_timeout(3).timeout_secs, 3);
    }

    #[test]
    fn decrypt_request_serializes_with_service_field_names() {
        let body = serde_json::to_string(&DecryptRequest {
            ciphertext_blob: "AQIDBA==".to_string(),
        })
        .unwrap();

        assert_eq!(body, r#"{"CiphertextBlob":"AQIDBA=="}"#);
    }

    #[test]
    fn decrypt_response_deserializes_service_field_names() {
        let response: DecryptResponse =
            serde_json::from_str(r#"{"Plaintext":"c2VjcmV0","KeyId":"ignored"}"#).unwrap();

        assert_eq!(BASE64.decode(response.plaintext).unwrap(), b"secret");
    }
}
