//! Slash-command request validation.
//!
//! Parses the form-encoded request body and authenticates the embedded token
//! against the process's decrypted shared secret. The comparison is
//! constant-time; semantically it is exact string equality.

use serde::Deserialize;
use subtle::ConstantTimeEq;

use super::errors::CommandError;
use super::incoming::IncomingCommand;

/// Raw form fields as the trigger posts them. Everything is optional so a
/// malformed or truncated body degrades to absent fields instead of a parse
/// failure reaching the host.
#[derive(Debug, Deserialize)]
struct RawSlashForm {
    token: Option<String>,
    user_name: Option<String>,
    command: Option<String>,
    channel_name: Option<String>,
    text: Option<String>,
}

/// Validator for incoming slash-command requests.
pub struct RequestValidator {
    /// The decrypted shared secret for this process.
    secret: String,
}

impl RequestValidator {
    /// Creates a validator bound to the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Parses and authenticates one request body.
    ///
    /// Missing `text` becomes an empty string. A missing or mismatched
    /// `token` fails with [`CommandError::InvalidToken`], carrying the
    /// offending value for the caller to log; it is never echoed back.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidToken` on any parse failure or token
    /// mismatch. There is no other failure mode.
    pub fn validate(&self, raw_body: &str) -> Result<IncomingCommand, CommandError> {
        let form: RawSlashForm = serde_urlencoded::from_str(raw_body)
            .map_err(|_| CommandError::invalid_token(None))?;

        let token = form
            .token
            .ok_or_else(|| CommandError::invalid_token(None))?;

        if !constant_time_eq(token.as_bytes(), self.secret.as_bytes()) {
            return Err(CommandError::invalid_token(Some(token)));
        }

        Ok(IncomingCommand {
            request_token: token,
            user_name: form.user_name.unwrap_or_default(),
            command_name: form.command.unwrap_or_default(),
            channel_name: form.channel_name.unwrap_or_default(),
            command_text: form.text.unwrap_or_default(),
        })
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// This prevents timing attacks that could leak information about the
/// configured secret.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
