//! End-to-end handling of one slash-command invocation.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::command::{CommandError, CommandResponse, RequestValidator};

use super::{CommandOrchestrator, SecretCache};

/// Processes a raw webhook body from secret lookup through the rendered
/// reply.
pub struct ProcessCommandHandler {
    secret_cache: Arc<SecretCache>,
    orchestrator: Arc<CommandOrchestrator>,
}

impl ProcessCommandHandler {
    pub fn new(secret_cache: Arc<SecretCache>, orchestrator: Arc<CommandOrchestrator>) -> Self {
        Self {
            secret_cache,
            orchestrator,
        }
    }

    /// Validate the form-encoded body against the shared secret and run the
    /// provider chain.
    ///
    /// # Errors
    ///
    /// Any [`CommandError`]; the caller maps them onto the response
    /// envelope.
    pub async fn handle(&self, raw_body: &str) -> Result<CommandResponse, CommandError> {
        let secret = self.secret_cache.ensure_secret().await?;

        let command = RequestValidator::new(secret)
            .validate(raw_body)
            .map_err(|e| {
                if let CommandError::InvalidToken {
                    offending_token: Some(token),
                } = &e
                {
                    // The token only ever reaches the server log, never the
                    // response body.
                    warn!(offending_token = %token, "Request token mismatch");
                } else {
                    warn!("Request rejected before token comparison");
                }
                e
            })?;

        info!(
            command = %command.command_name,
            user = %command.user_name,
            "Processing slash command"
        );

        self.orchestrator.run(&command).await
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
