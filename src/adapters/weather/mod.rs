//! Weather provider adapter.

mod dark_sky;

pub use dark_sky::{DarkSkyClient, DarkSkyConfig};
