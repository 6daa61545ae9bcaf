//! Application layer - use-case orchestration over the ports.
//!
//! - `SecretCache` - decrypt-once caching of the shared secret
//! - `CommandOrchestrator` - sequential geocode-then-weather chain
//! - `ProcessCommandHandler` - one webhook invocation end to end

mod orchestrator;
mod process_command;
mod secret_cache;

pub use orchestrator::CommandOrchestrator;
pub use process_command::ProcessCommandHandler;
pub use secret_cache::SecretCache;
