//! Domain layer - invocation semantics with no I/O.
//!
//! - `command` - slash-command request/response model and validation
//! - `forecast` - geocoding and weather value types plus reply rendering

pub mod command;
pub mod forecast;
