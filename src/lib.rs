//! Slashcast - Slash-command weather webhook service
//!
//! Receives slash-command webhooks, authenticates them against a shared
//! secret decrypted once per process, and answers with the current weather
//! for the requested location.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
