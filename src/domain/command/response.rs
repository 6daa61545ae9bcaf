//! Outbound slash-command payload.

use serde::Serialize;

/// How the reply is surfaced in the invoking channel.
///
/// The trigger treats an absent `response_type` as a private (ephemeral)
/// reply, so the default is expressed by omitting the field entirely.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Reply visible to the whole channel.
    InChannel,
}

/// The terminal artifact of one invocation: the formatted reply text plus
/// its visibility.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandResponse {
    /// `None` means the field is omitted on the wire and the trigger falls
    /// back to its private (ephemeral) visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    pub text: String,
}

impl CommandResponse {
    /// A reply visible to the whole channel.
    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: Some(ResponseType::InChannel),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_channel_serializes_response_type() {
        let response = CommandResponse::in_channel("hello");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"response_type":"in_channel","text":"hello"}"#);
    }

    #[test]
    fn absent_response_type_is_omitted_on_the_wire() {
        let response = CommandResponse {
            response_type: None,
            text: "hello".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"text":"hello"}"#);
    }
}
