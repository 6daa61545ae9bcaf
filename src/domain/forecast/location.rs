//! Resolved location types.

/// A latitude/longitude pair as the geocoder resolved it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One geocoding result.
///
/// Built from a single entry of the provider's result list; the first entry
/// is authoritative for the rest of the chain. Consumed immediately by the
/// weather stage and not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoResult {
    /// Human-readable address the provider resolved the query to.
    pub formatted_address: String,
    /// Resolved coordinates, fed to the weather stage.
    pub coordinates: Coordinates,
}
