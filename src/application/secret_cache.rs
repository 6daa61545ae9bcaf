//! Decrypt-once cache for the shared slash-command secret.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tokio::sync::OnceCell;
use tracing::{debug, error};

use crate::domain::command::CommandError;
use crate::ports::SecretDecryptor;

/// Holds the encrypted token and decrypts it at most once per process.
///
/// The first invocation that needs the secret pays for the key-service
/// round trip; every later invocation reads the cached plaintext. A failed
/// decrypt is not cached, so the next invocation retries.
pub struct SecretCache {
    encrypted_token: Option<String>,
    decryptor: Arc<dyn SecretDecryptor>,
    secret: OnceCell<String>,
}

impl SecretCache {
    pub fn new(encrypted_token: Option<String>, decryptor: Arc<dyn SecretDecryptor>) -> Self {
        Self {
            encrypted_token,
            decryptor,
            secret: OnceCell::new(),
        }
    }

    /// Return the plaintext secret, decrypting on first use.
    ///
    /// # Errors
    ///
    /// - [`CommandError::SecretNotConfigured`] when no encrypted token was
    ///   configured for this deployment
    /// - [`CommandError::SecretUnavailable`] when decoding or decryption
    ///   fails
    pub async fn ensure_secret(&self) -> Result<&str, CommandError> {
        let Some(encrypted) = self.encrypted_token.as_deref() else {
            return Err(CommandError::SecretNotConfigured);
        };

        // Concurrent first callers collapse into a single decrypt; the
        // cell stays empty on failure.
        let secret = self
            .secret
            .get_or_try_init(|| self.decrypt(encrypted))
            .await?;

        Ok(secret)
    }

    async fn decrypt(&self, encrypted: &str) -> Result<String, CommandError> {
        debug!("Decrypting slash-command secret");

        let cipher_blob = BASE64.decode(encrypted).map_err(|e| {
            error!(error = %e, "Encrypted token is not valid base64");
            CommandError::secret_unavailable(format!("invalid base64 token: {e}"))
        })?;

        let plaintext = self.decryptor.decrypt(&cipher_blob).await.map_err(|e| {
            error!(error = %e, "Decrypt error");
            CommandError::secret_unavailable(e.to_string())
        })?;

        String::from_utf8(plaintext).map_err(|e| {
            error!(error = %e, "Decrypted secret is not valid UTF-8");
            CommandError::secret_unavailable(format!("secret is not valid UTF-8: {e}"))
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
