//! Secret decryptor port for the key-management collaborator.

use async_trait::async_trait;
use thiserror::Error;

/// Port for decrypting the configured slash-command token.
///
/// Implementations talk to whatever key-management service holds the key;
/// the caller only ever sees plaintext bytes or a [`DecryptError`].
#[async_trait]
pub trait SecretDecryptor: Send + Sync {
    /// Decrypt an encrypted blob into plaintext bytes.
    async fn decrypt(&self, cipher_blob: &[u8]) -> Result<Vec<u8>, DecryptError>;
}

/// Errors from the key-management service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecryptError {
    /// The request never completed (connect failure, timeout).
    #[error("Key service request failed: {0}")]
    Transport(String),

    /// The service answered but refused to decrypt.
    #[error("Key service rejected the request: {0}")]
    Rejected(String),

    /// The service answered with a body we could not interpret.
    #[error("Key service returned a malformed response: {0}")]
    Malformed(String),
}
