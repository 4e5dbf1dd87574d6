//! Application state - single source of truth
//!
//! Components receive `&AppState` as props and only the reducer mutates it.

use crate::geo::{Coordinate, Viewport};

/// User-facing message for every failed fetch; the underlying error is logged only
pub const WEATHER_ERROR_MESSAGE: &str = "Cannot load weather data. Try again.";

pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// Current weather at the selected point, from Open-Meteo
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherSnapshot {
    /// °C
    pub temperature: f64,
    /// km/h
    pub wind_speed: f64,
    /// Degrees, meteorological convention
    pub wind_direction: f64,
    /// Observation time as reported by the API (ISO 8601, local to the point)
    pub time: String,
}

/// Phase of the click-to-fetch cycle, derived from the state flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// Point picked by the last click (None = nothing selected yet)
    pub selected: Option<Coordinate>,

    /// Weather for the selected point (None = not loaded)
    pub weather: Option<WeatherSnapshot>,

    /// A fetch is in flight
    pub is_loading: bool,

    /// Error message (if last fetch failed)
    pub error: Option<String>,

    /// Id of the most recently started fetch; older results are stale
    pub request_id: u64,

    /// Visible part of the map
    pub viewport: Viewport,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,
}

impl AppState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            selected: None,
            weather: None,
            is_loading: false,
            error: None,
            request_id: 0,
            viewport,
            tick_count: 0,
        }
    }

    pub fn phase(&self) -> FetchPhase {
        if self.is_loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else if self.weather.is_some() {
            FetchPhase::Success
        } else {
            FetchPhase::Idle
        }
    }

    /// Whether the first-use hint should be shown
    pub fn shows_hint(&self) -> bool {
        self.selected.is_none() && self.weather.is_none()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
