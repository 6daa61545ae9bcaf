//! Current weather conditions.

/// The current-condition scalars the weather provider reports.
///
/// Units are provider-defined (imperial for the default provider): degrees
/// Fahrenheit, probabilities as 0..=1 fractions, wind in mph, pressure in
/// millibars. Consumed once to build the reply text and not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub summary: String,
    pub temperature: f64,
    pub precip_probability: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pressure: f64,
}
