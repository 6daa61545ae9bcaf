//! Reply text assembly.
//!
//! Renders the resolved conditions into the multi-line markup block the
//! channel displays. The numeric formatting is load-bearing: clients pin the
//! exact output, so temperature, percentages, and pressure truncate toward
//! negative infinity while wind rounds to one decimal, ties away from zero.

use super::conditions::CurrentConditions;

/// Renders the reply text for one resolved location.
///
/// Header line combines the condition summary with the resolved address,
/// followed by one labeled line per metric.
pub fn render(conditions: &CurrentConditions, formatted_address: &str) -> String {
    let mut text = format!("*{} in {}*\n\n", conditions.summary, formatted_address);
    text.push_str(&format!(
        ":thermometer:*Temperature:* {} F\n",
        floor_whole(conditions.temperature)
    ));
    text.push_str(&format!(
        ":umbrella_with_rain_drops:*Precipitation:* {}%\n",
        floor_percent(conditions.precip_probability)
    ));
    text.push_str(&format!(
        ":sweat_drops:*Humidity:* {}%\n",
        floor_percent(conditions.humidity)
    ));
    text.push_str(&format!(
        ":wind_blowing_face:*Wind:* {} mph\n",
        one_decimal(conditions.wind_speed)
    ));
    text.push_str(&format!(
        ":compression:*Pressure:* {} mb\n",
        floor_whole(conditions.pressure)
    ));
    text
}

fn floor_whole(value: f64) -> i64 {
    value.floor() as i64
}

fn floor_percent(fraction: f64) -> i64 {
    (fraction * 100.0).floor() as i64
}

/// One decimal place, ties rounded away from zero (7.25 -> "7.3").
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
