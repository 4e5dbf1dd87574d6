//! Reducer - pure function: (state, action) -> (changed, effect)
//!
//! All state mutations happen here. Side effects are only declared,
//! never performed.

use tracing::debug;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, WEATHER_ERROR_MESSAGE};

/// Outcome of one action: whether to redraw, plus at most one effect to run
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResult {
    pub changed: bool,
    pub effect: Option<Effect>,
}

impl DispatchResult {
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effect: None,
        }
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            effect: None,
        }
    }

    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effect: Some(effect),
        }
    }
}

/// The reducer handles all state transitions
///
/// # Returns
/// Whether the UI should re-render, plus the effect for the runtime to run
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Map actions =====
        Action::MapClick(coordinate) => {
            // New cycle: overwrite the point, drop old results, mark loading
            state.selected = Some(coordinate);
            state.weather = None;
            state.error = None;
            state.is_loading = true;
            state.request_id = state.request_id.wrapping_add(1);

            DispatchResult::changed_with(Effect::FetchWeather {
                request_id: state.request_id,
                coordinate,
            })
        }

        Action::MapPan(direction) => changed_if(state.viewport.pan(direction)),

        Action::MapZoomIn => changed_if(state.viewport.zoom_in()),

        Action::MapZoomOut => changed_if(state.viewport.zoom_out()),

        // ===== Weather actions =====
        Action::WeatherDidLoad {
            request_id,
            weather,
        } => {
            if request_id != state.request_id {
                debug!(request_id, latest = state.request_id, "Dropping stale weather result");
                return DispatchResult::unchanged();
            }
            state.weather = Some(weather);
            state.is_loading = false;
            state.error = None;
            DispatchResult::changed()
        }

        Action::WeatherDidError { request_id } => {
            if request_id != state.request_id {
                debug!(request_id, latest = state.request_id, "Dropping stale weather error");
                return DispatchResult::unchanged();
            }
            state.weather = None;
            state.is_loading = false;
            state.error = Some(WEATHER_ERROR_MESSAGE.to_string());
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            changed_if(state.is_loading) // only re-render if loading (for spinner animation)
        }

        Action::Quit => {
            // Quit is handled in the runtime loop, not here
            DispatchResult::unchanged()
        }
    }
}

fn changed_if(changed: bool) -> DispatchResult {
    if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Coordinate, Direction};
    use crate::state::{FetchPhase, WeatherSnapshot};

    fn sample_weather() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: 15.2,
            wind_speed: 3.4,
            wind_direction: 270.0,
            time: "2024-01-01T12:00".into(),
        }
    }

    #[test]
    fn test_click_sets_point_and_loading() {
        let mut state = AppState::default();
        let point = Coordinate::new(48.8566, 2.3522);

        let result = reducer(&mut state, Action::MapClick(point));

        assert!(result.changed);
        assert_eq!(state.selected, Some(point));
        assert_eq!(state.phase(), FetchPhase::Loading);
        assert_eq!(
            result.effect,
            Some(Effect::FetchWeather {
                request_id: 1,
                coordinate: point,
            })
        );
    }

    #[test]
    fn test_click_clears_previous_weather_and_error() {
        let mut state = AppState {
            weather: Some(sample_weather()),
            error: Some("old".into()),
            ..Default::default()
        };

        reducer(&mut state, Action::MapClick(Coordinate::new(1.0, 2.0)));

        assert!(state.weather.is_none());
        assert!(state.error.is_none());
        assert!(state.is_loading);
    }

    #[test]
    fn test_click_overwrites_selection() {
        let mut state = AppState::default();
        reducer(&mut state, Action::MapClick(Coordinate::new(10.0, 20.0)));
        reducer(&mut state, Action::MapClick(Coordinate::new(-5.0, 100.0)));

        assert_eq!(state.selected, Some(Coordinate::new(-5.0, 100.0)));
        assert_eq!(state.request_id, 2);
    }

    #[test]
    fn test_weather_did_load_enters_success() {
        let mut state = AppState::default();
        reducer(&mut state, Action::MapClick(Coordinate::new(50.0, 14.0)));

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 1,
                weather: sample_weather(),
            },
        );

        assert!(result.changed);
        assert!(result.effect.is_none());
        assert_eq!(state.phase(), FetchPhase::Success);
        assert_eq!(state.weather, Some(sample_weather()));
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_weather_did_error_enters_failed_with_generic_message() {
        let mut state = AppState::default();
        reducer(&mut state, Action::MapClick(Coordinate::new(50.0, 14.0)));

        let result = reducer(&mut state, Action::WeatherDidError { request_id: 1 });

        assert!(result.changed);
        assert_eq!(state.phase(), FetchPhase::Failed);
        assert_eq!(state.error.as_deref(), Some(WEATHER_ERROR_MESSAGE));
        assert!(state.weather.is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_second_response_decides_outcome() {
        let mut state = AppState::default();
        let point = Coordinate::new(50.08, 14.43);
        reducer(&mut state, Action::MapClick(point));
        reducer(&mut state, Action::MapClick(point));

        // The first (slow) request succeeds after the second failed
        reducer(&mut state, Action::WeatherDidError { request_id: 2 });
        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 1,
                weather: sample_weather(),
            },
        );

        assert!(!result.changed);
        assert_eq!(state.phase(), FetchPhase::Failed);
        assert!(state.weather.is_none());
    }

    #[test]
    fn test_stale_error_does_not_touch_loading() {
        let mut state = AppState::default();
        reducer(&mut state, Action::MapClick(Coordinate::new(0.0, 0.0)));
        reducer(&mut state, Action::MapClick(Coordinate::new(1.0, 1.0)));

        let result = reducer(&mut state, Action::WeatherDidError { request_id: 1 });

        assert!(!result.changed);
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_pan_and_zoom() {
        let mut state = AppState::default();
        let before = state.viewport;

        assert!(reducer(&mut state, Action::MapPan(Direction::Right)).changed);
        assert!(state.viewport.center.lon > before.center.lon);

        assert!(reducer(&mut state, Action::MapZoomIn).changed);
        assert_eq!(state.viewport.zoom, before.zoom + 1);

        assert!(reducer(&mut state, Action::MapZoomOut).changed);
        assert_eq!(state.viewport.zoom, before.zoom);
    }

    #[test]
    fn test_tick_only_rerenders_when_loading() {
        let mut state = AppState::default();

        // Not loading - no re-render
        assert!(!reducer(&mut state, Action::Tick).changed);

        // Loading - should re-render
        state.is_loading = true;
        assert!(reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 2);
    }

    #[test]
    fn test_quit_is_noop() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::Quit);
        assert!(!result.changed);
        assert!(result.effect.is_none());
    }
}
