//! Root view: sidebar on the left, map on the right, help bar at the bottom

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::{
    Component, HelpBar, HelpBarProps, MapView, MapViewProps, Sidebar, SidebarProps,
};
use crate::action::Action;
use crate::runtime::EventKind;
use crate::state::AppState;

pub struct WeatherMapViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct WeatherMapView {
    map: MapView,
}

impl WeatherMapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }
}

impl Component<Action> for WeatherMapView {
    type Props<'a> = WeatherMapViewProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: WeatherMapViewProps<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        if let EventKind::Key(key) = event {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return vec![Action::Quit];
            }
        }

        self.map.handle_event(
            event,
            MapViewProps {
                state: props.state,
                is_focused: true,
            },
        )
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherMapViewProps<'_>) {
        let state = props.state;

        let rows = Layout::vertical([
            Constraint::Min(1),    // Sidebar + map
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let columns =
            Layout::horizontal([Constraint::Length(Sidebar::WIDTH), Constraint::Min(10)])
                .split(rows[0]);

        Sidebar.render(frame, columns[0], SidebarProps { state });
        self.map.render(
            frame,
            columns[1],
            MapViewProps {
                state,
                is_focused: props.is_focused,
            },
        );
        HelpBar.render(frame, rows[1], HelpBarProps);
    }
}
