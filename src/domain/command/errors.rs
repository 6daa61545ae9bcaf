//! Command processing error types.
//!
//! Every failure in the secret lifecycle, request validation, or the provider
//! call chain is normalized into [`CommandError`] before it reaches the
//! response envelope. The provider clients surface different shapes (transport
//! errors, bad statuses, malformed bodies); this is the single tagged type the
//! rest of the system sees.
//!
//! # Transport Mapping
//!
//! | Error | Status |
//! |-------|--------|
//! | SecretNotConfigured | 400 |
//! | SecretUnavailable | 400 |
//! | InvalidToken | 400 |
//! | LocationNotFound | 400 |
//! | UpstreamUnavailable | 400 |

use std::fmt;

use thiserror::Error;

/// Identity of the provider stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocode,
    Weather,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Geocode => write!(f, "geocode"),
            Stage::Weather => write!(f, "weather"),
        }
    }
}

/// Errors that occur while processing one slash-command invocation.
///
/// Display strings are the user-visible response bodies; they must never
/// contain the configured secret or the offending request token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// No encrypted token is present in configuration.
    #[error("Token has not been set.")]
    SecretNotConfigured,

    /// The key-management service failed to produce a plaintext token.
    #[error("Unable to decrypt the request token")]
    SecretUnavailable { reason: String },

    /// Request token did not match the configured secret (or was absent).
    ///
    /// Carries the offending token for server-side logging only; the Display
    /// form deliberately omits it.
    #[error("Invalid request token")]
    InvalidToken { offending_token: Option<String> },

    /// The geocoder returned no results for the query.
    #[error("Location not found.")]
    LocationNotFound,

    /// A provider call failed: transport error, non-2xx status, or an
    /// unparsable body.
    #[error("The {stage} service is unavailable")]
    UpstreamUnavailable { stage: Stage, reason: String },
}

impl CommandError {
    pub fn secret_unavailable(reason: impl Into<String>) -> Self {
        CommandError::SecretUnavailable {
            reason: reason.into(),
        }
    }

    pub fn invalid_token(offending_token: Option<String>) -> Self {
        CommandError::InvalidToken { offending_token }
    }

    pub fn upstream(stage: Stage, reason: impl Into<String>) -> Self {
        CommandError::UpstreamUnavailable {
            stage,
            reason: reason.into(),
        }
    }
}
