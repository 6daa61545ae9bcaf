//! Slash-command domain module.
//!
//! Models one webhook invocation end to end: the incoming form fields, the
//! token authentication step, the outbound reply payload, and the error
//! taxonomy the response envelope maps to transport form.
//!
//! # Module Structure
//!
//! - `incoming` - IncomingCommand request view
//! - `validator` - RequestValidator (form parse + token check)
//! - `response` - CommandResponse reply payload
//! - `errors` - CommandError taxonomy

mod errors;
mod incoming;
mod response;
mod validator;

pub use errors::{CommandError, Stage};
pub use incoming::IncomingCommand;
pub use response::{CommandResponse, ResponseType};
pub use validator::RequestValidator;
