//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled by the runtime loop.
//! This keeps the reducer pure while making async operations explicit.

use tracing::{debug, warn};

use crate::action::Action;
use crate::api::WeatherClient;
use crate::geo::Coordinate;
use crate::tasks::TaskManager;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather for the given coordinate
    FetchWeather {
        request_id: u64,
        coordinate: Coordinate,
    },
}

/// Handle effects by spawning tasks
///
/// Every exit path of the fetch task produces exactly one result action,
/// so the loading flag is always cleared by the reducer.
pub fn handle_effect(effect: Effect, tasks: &mut TaskManager, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather {
            request_id,
            coordinate,
        } => {
            let client = client.clone();
            debug!(request_id, lat = coordinate.lat, lon = coordinate.lon, "Fetching weather");

            tasks.fetch(request_id, async move {
                match client.current_weather(coordinate).await {
                    Ok(weather) => {
                        debug!(request_id, temperature = weather.temperature, "Weather loaded");
                        Action::WeatherDidLoad {
                            request_id,
                            weather,
                        }
                    }
                    Err(e) => {
                        warn!(request_id, error = %e, "Weather fetch failed");
                        Action::WeatherDidError { request_id }
                    }
                }
            });
        }
    }
}
