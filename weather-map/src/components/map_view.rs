//! World map surface: draws coastlines, the marker and its popup, and turns
//! clicks into coordinates

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders,
        canvas::{Canvas, Map, MapResolution},
    },
};

use super::{Component, MarkerPopup, MarkerPopupProps, default_icon};
use crate::action::Action;
use crate::geo::Direction;
use crate::runtime::EventKind;
use crate::state::AppState;

pub struct MapViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The map component
///
/// Remembers the canvas area of the last render so clicks can be projected
/// back onto the viewport.
#[derive(Default)]
pub struct MapView {
    canvas_area: Option<Rect>,
}

impl MapView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inner (drawable) area from the last render
    pub fn canvas_area(&self) -> Option<Rect> {
        self.canvas_area
    }
}

impl Component<Action> for MapView {
    type Props<'a> = MapViewProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: MapViewProps<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }
        let viewport = props.state.viewport;

        match event {
            EventKind::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => self
                    .canvas_area
                    .and_then(|area| viewport.coordinate_at(area, mouse.column, mouse.row))
                    .map(Action::MapClick)
                    .into_iter()
                    .collect(),
                _ => vec![],
            },
            EventKind::Scroll { column, row, delta } => {
                let inside = self
                    .canvas_area
                    .is_some_and(|area| viewport.coordinate_at(area, *column, *row).is_some());
                match (inside, delta.signum()) {
                    (true, -1) => vec![Action::MapZoomIn],
                    (true, 1) => vec![Action::MapZoomOut],
                    _ => vec![],
                }
            }
            EventKind::Key(key) => match key.code {
                KeyCode::Up => vec![Action::MapPan(Direction::Up)],
                KeyCode::Down => vec![Action::MapPan(Direction::Down)],
                KeyCode::Left => vec![Action::MapPan(Direction::Left)],
                KeyCode::Right => vec![Action::MapPan(Direction::Right)],
                KeyCode::Char('+') | KeyCode::Char('=') => vec![Action::MapZoomIn],
                KeyCode::Char('-') => vec![Action::MapZoomOut],
                _ => vec![],
            },
            EventKind::Resize(..) => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: MapViewProps<'_>) {
        let state = props.state;
        let viewport = state.viewport;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" Map ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_bottom(
                Line::from(format!(
                    " zoom {} · {:.2}, {:.2} ",
                    viewport.zoom, viewport.center.lat, viewport.center.lon
                ))
                .right_aligned(),
            );

        let inner = block.inner(area);
        self.canvas_area = Some(inner);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds(viewport.x_bounds())
            .y_bounds(viewport.y_bounds())
            .paint(|ctx| {
                ctx.draw(&Map {
                    color: Color::Rgb(90, 150, 110),
                    resolution: MapResolution::High,
                });
            });
        frame.render_widget(canvas, area);

        // Marker uses the click projection, not canvas label placement
        let Some(point) = state.selected else {
            return;
        };
        let Some((x, y)) = viewport.cell_at(inner, point) else {
            return;
        };

        let icon = default_icon();
        frame.render_widget(
            Span::styled(icon.glyph, Style::default().fg(icon.color).bold()),
            Rect::new(x, y, 1, 1),
        );

        let mut popup = MarkerPopup;
        popup.render(
            frame,
            inner,
            MarkerPopupProps {
                coordinate: point,
                weather: state.weather.as_ref(),
                anchor: (x, y),
            },
        );
    }
}
