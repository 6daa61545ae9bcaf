//! Route definitions for the slash-command webhook.

use axum::routing::post;
use axum::Router;

use super::handlers::{handle_slash_command, CommandAppState};

/// Creates the command router.
pub fn command_routes(state: CommandAppState) -> Router {
    Router::new()
        .route("/command", post(handle_slash_command))
        .with_state(state)
}
