//! Actions - everything that can happen to the app
//!
//! Naming convention:
//! - Prefix is the category: `MapClick`, `MapPan` -> "map"
//! - `Did` marks the result of an async task: `WeatherDidLoad`, `WeatherDidError`

use crate::geo::{Coordinate, Direction};
use crate::state::WeatherSnapshot;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Map category =====
    /// Intent: user clicked the map at this coordinate (starts a fetch)
    MapClick(Coordinate),

    /// Move the viewport
    MapPan(Direction),

    MapZoomIn,

    MapZoomOut,

    // ===== Weather category =====
    /// Result: weather for fetch `request_id` loaded
    WeatherDidLoad {
        request_id: u64,
        weather: WeatherSnapshot,
    },

    /// Result: fetch `request_id` failed (details are logged, not carried)
    WeatherDidError { request_id: u64 },

    // ===== Uncategorized (global) =====
    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}

impl Action {
    /// Action name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::MapClick(_) => "MapClick",
            Action::MapPan(_) => "MapPan",
            Action::MapZoomIn => "MapZoomIn",
            Action::MapZoomOut => "MapZoomOut",
            Action::WeatherDidLoad { .. } => "WeatherDidLoad",
            Action::WeatherDidError { .. } => "WeatherDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Concise description for the action log
    pub fn summary(&self) -> String {
        match self {
            Action::MapClick(coord) => {
                format!("MapClick {{ lat: {:.4}, lon: {:.4} }}", coord.lat, coord.lon)
            }
            Action::WeatherDidLoad {
                request_id,
                weather,
            } => format!(
                "WeatherDidLoad {{ id: {}, temp: {:.1}°C, wind: {:.1} }}",
                request_id, weather.temperature, weather.wind_speed
            ),
            _ => format!("{:?}", self),
        }
    }

    /// High-frequency actions that the action log skips
    pub fn is_noisy(&self) -> bool {
        matches!(self, Action::Tick)
    }
}
