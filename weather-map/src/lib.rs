//! Weather Map - a terminal world map that shows current weather for the clicked point
//!
//! Data flow:
//! 1. Event (mouse/keyboard) -> `Component::handle_event()` -> Actions
//! 2. Actions go through the reducer, which updates [`state::AppState`] and returns effects
//! 3. Effects start weather fetches on the [`tasks::TaskManager`], one task per request
//! 4. Task results come back as actions
//! 5. If state changed, re-render
//!
//! Weather comes from the Open-Meteo forecast API, one request per click.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod geo;
pub mod logging;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod tasks;
pub mod testing;
