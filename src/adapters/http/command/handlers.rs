//! Slash-command webhook handler.

use std::sync::Arc;

use axum::extract::State;

use crate::application::ProcessCommandHandler;

use super::envelope::{wrap, TransportResponse};

/// Shared state for the command routes.
#[derive(Clone)]
pub struct CommandAppState {
    pub handler: Arc<ProcessCommandHandler>,
}

/// POST handler for the slash-command webhook.
///
/// Takes the body raw rather than through a form extractor so malformed
/// payloads flow into the normal rejection path instead of an extractor
/// rejection.
pub async fn handle_slash_command(
    State(state): State<CommandAppState>,
    body: String,
) -> TransportResponse {
    wrap(state.handler.handle(&body).await)
}
