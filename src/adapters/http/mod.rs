//! Inbound HTTP adapters.

pub mod command;
