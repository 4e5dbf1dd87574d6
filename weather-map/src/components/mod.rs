//! UI components
//!
//! Components are pure functions of their props: `render` draws, `handle_event`
//! returns actions. Only hit-test geometry from the last render is kept in `&mut self`.

use ratatui::{Frame, layout::Rect};

use crate::runtime::EventKind;

pub mod help_bar;
pub mod map_view;
pub mod marker;
pub mod sidebar;
pub mod weather_card;
pub mod weather_map;

pub use help_bar::{HelpBar, HelpBarProps};
pub use map_view::{MapView, MapViewProps};
pub use marker::{MarkerIcon, MarkerPopup, MarkerPopupProps, default_icon, install_default_icon};
pub use sidebar::{Sidebar, SidebarProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
pub use weather_map::{WeatherMapView, WeatherMapViewProps};

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const ERROR_ICON: &str = "⚠";

/// A UI element that renders from props and emits actions
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Default: render-only component, no actions.
    #[allow(unused_variables)]
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<A> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

/// Spinner frame for the given tick
pub fn spinner(tick_count: u32) -> &'static str {
    SPINNERS[(tick_count as usize / 2) % SPINNERS.len()]
}
