//! Structured view of one slash-command invocation.

/// The fields a slash-command trigger posts in its form-encoded body.
///
/// Created per invocation by [`RequestValidator`](super::RequestValidator),
/// read-only afterwards, and discarded when the invocation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingCommand {
    /// The shared-secret token the trigger embedded in the request.
    pub request_token: String,
    /// Name of the user who invoked the command.
    pub user_name: String,
    /// The slash command itself (e.g. `/weather`).
    pub command_name: String,
    /// Channel the command was invoked in.
    pub channel_name: String,
    /// Free-form command text: the location query. Absent in the request
    /// means empty here, never an error.
    pub command_text: String,
}
