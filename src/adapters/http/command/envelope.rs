//! Transport response envelope.
//!
//! The host contract pins the status code as its text literal and the
//! content type as JSON for both outcomes, error bodies included.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::domain::command::{CommandError, CommandResponse};

const CONTENT_TYPE_JSON: &str = "application/json";

/// The wire-level reply handed back to the trigger host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// Status code as its text literal, per the host contract.
    pub status_code: &'static str,
    pub body: String,
    pub content_type: &'static str,
}

/// Maps a processing outcome onto the wire envelope. Total: every success
/// becomes a 200 with the serialized reply, every error a 400 with the
/// error's message as body.
pub fn wrap(result: Result<CommandResponse, CommandError>) -> TransportResponse {
    match result {
        Ok(response) => TransportResponse {
            status_code: "200",
            // CommandResponse contains only strings and a unit enum, so
            // serialization cannot fail.
            body: serde_json::to_string(&response).expect("response serializes to JSON"),
            content_type: CONTENT_TYPE_JSON,
        },
        Err(error) => TransportResponse {
            status_code: "400",
            body: error.to_string(),
            content_type: CONTENT_TYPE_JSON,
        },
    }
}

impl IntoResponse for TransportResponse {
    fn into_response(self) -> Response {
        let status = match self.status_code {
            "200" => StatusCode::OK,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}
