//! Shared-secret configuration
//!
//! The slash-command token arrives encrypted (base64 transport encoding) and
//! is decrypted once per process through the key-management service. Absence
//! of the encrypted token is a valid "not configured" state, not a startup
//! failure: the service boots and every invocation answers with a 400.

use serde::Deserialize;

use super::error::ValidationError;

/// Sentinel the deployment tooling leaves in place before a real token is
/// pasted in. Treated the same as an absent value.
const UNSET_PLACEHOLDER: &str = "<kmsEncryptedToken>";

/// Shared-secret configuration (encrypted token + key service)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretConfig {
    /// Base64-encoded, KMS-encrypted slash-command token
    pub kms_encrypted_token: Option<String>,

    /// Base URL of the key-management service used to decrypt the token
    pub kms_endpoint: Option<String>,
}

impl SecretConfig {
    /// The encrypted token, if one is actually configured.
    ///
    /// Returns `None` when the value is absent, empty, or still the unset
    /// placeholder.
    pub fn encrypted_token(&self) -> Option<&str> {
        self.kms_encrypted_token
            .as_deref()
            .filter(|token| !token.is_empty() && *token != UNSET_PLACEHOLDER)
    }

    /// Whether a real encrypted token is present.
    pub fn is_configured(&self) -> bool {
        self.encrypted_token().is_some()
    }

    /// Validate secret configuration
    ///
    /// A missing token is fine; a token without a key service endpoint is not,
    /// since the decrypt call would have nowhere to go.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_configured() {
            match self.kms_endpoint.as_deref() {
                None | Some("") => return Err(ValidationError::MissingRequired("KMS_ENDPOINT")),
                Some(endpoint) if !endpoint.starts_with("http") => {
                    return Err(ValidationError::InvalidKmsEndpoint)
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
