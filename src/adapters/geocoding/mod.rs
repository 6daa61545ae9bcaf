//! Geocoding provider adapter.

mod google;

pub use google::{GoogleGeocoder, GoogleGeocoderConfig};
