//! Key-management service adapter.

mod http_client;

pub use http_client::{HttpKmsClient, KmsConfig};
