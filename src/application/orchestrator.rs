//! Sequential geocode-then-weather call chain.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::command::{CommandError, CommandResponse, IncomingCommand, Stage};
use crate::domain::forecast::report;
use crate::ports::{Geocoder, WeatherProvider};

/// Runs a validated command through the provider chain and renders the
/// channel reply.
pub struct CommandOrchestrator {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherProvider>,
}

impl CommandOrchestrator {
    pub fn new(geocoder: Arc<dyn Geocoder>, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { geocoder, weather }
    }

    /// Resolve the command text to coordinates, fetch current conditions
    /// there and render the reply.
    ///
    /// # Errors
    ///
    /// - [`CommandError::LocationNotFound`] when the geocoder matched
    ///   nothing
    /// - [`CommandError::UpstreamUnavailable`] when either provider call
    ///   fails, tagged with the stage that failed
    pub async fn run(&self, command: &IncomingCommand) -> Result<CommandResponse, CommandError> {
        debug!(
            user = %command.user_name,
            channel = %command.channel_name,
            "Resolving location for slash command"
        );

        let candidates = self
            .geocoder
            .geocode(&command.command_text)
            .await
            .map_err(|e| CommandError::upstream(Stage::Geocode, e.to_string()))?;

        // The weather provider is only consulted once a location resolved.
        let Some(best_match) = candidates.into_iter().next() else {
            info!(query = %command.command_text, "Geocoder returned no results");
            return Err(CommandError::LocationNotFound);
        };

        let conditions = self
            .weather
            .current_conditions(&best_match.coordinates)
            .await
            .map_err(|e| CommandError::upstream(Stage::Weather, e.to_string()))?;

        info!(address = %best_match.formatted_address, "Rendering forecast reply");

        Ok(CommandResponse::in_channel(report::render(
            &conditions,
            &best_match.formatted_address,
        )))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
