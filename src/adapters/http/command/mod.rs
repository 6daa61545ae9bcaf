//! Inbound HTTP surface for the slash-command webhook.

mod envelope;
mod handlers;
mod routes;

pub use envelope::{wrap, TransportResponse};
pub use handlers::CommandAppState;
pub use routes::command_routes;
