//! Map marker: process-wide icon configuration and the marker popup

use std::sync::OnceLock;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::geo::Coordinate;
use crate::state::WeatherSnapshot;

/// Glyph and color used to draw the marker on the map
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerIcon {
    pub glyph: &'static str,
    pub color: Color,
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            glyph: "◉",
            color: Color::Red,
        }
    }
}

static DEFAULT_ICON: OnceLock<MarkerIcon> = OnceLock::new();

/// Set the marker icon for the whole process. Call once during startup,
/// before the first render.
///
/// Returns `false` if an icon was already in place.
pub fn install_default_icon(icon: MarkerIcon) -> bool {
    DEFAULT_ICON.set(icon).is_ok()
}

/// The installed icon, or the built-in one if startup did not install any
pub fn default_icon() -> MarkerIcon {
    *DEFAULT_ICON.get_or_init(MarkerIcon::default)
}

/// Popup attached to the marker
pub struct MarkerPopup;

pub struct MarkerPopupProps<'a> {
    pub coordinate: Coordinate,
    pub weather: Option<&'a WeatherSnapshot>,
    /// Terminal cell the marker is drawn in
    pub anchor: (u16, u16),
}

impl MarkerPopup {
    fn lines(props: &MarkerPopupProps<'_>) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::White).bold();
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Lat: ", label),
                Span::raw(format!("{:.4}", props.coordinate.lat)),
            ]),
            Line::from(vec![
                Span::styled("Lng: ", label),
                Span::raw(format!("{:.4}", props.coordinate.lon)),
            ]),
        ];

        match props.weather {
            Some(weather) => {
                lines.push(Line::from(vec![
                    Span::styled("Temp: ", label),
                    Span::raw(format!("{} °C", weather.temperature)),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Wind: ", label),
                    Span::raw(format!("{} km/h", weather.wind_speed)),
                ]));
            }
            None => lines.push(Line::from(Span::styled(
                "Loading weather...",
                Style::default().fg(Color::Gray),
            ))),
        }

        lines
    }
}

impl Component<Action> for MarkerPopup {
    type Props<'a> = MarkerPopupProps<'a>;

    /// `area` bounds the popup (the map's inner area); it is placed above the
    /// anchor when there is room, below it otherwise.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: MarkerPopupProps<'_>) {
        let lines = Self::lines(&props);
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 2;
        let height = lines.len() as u16 + 2;

        let Some(popup) = popup_area(props.anchor, (width, height), area) else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(120, 120, 140)));

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

/// Place a `size` box above or below `anchor`, kept inside `bounds`.
///
/// The box never covers the anchor row. Returns `None` when it fits
/// neither above nor below.
pub fn popup_area(anchor: (u16, u16), size: (u16, u16), bounds: Rect) -> Option<Rect> {
    let (width, height) = size;
    if width > bounds.width || height > bounds.height {
        return None;
    }

    let (ax, ay) = anchor;
    let max_x = bounds.right() - width;
    let x = ax.saturating_sub(width / 2).clamp(bounds.x, max_x);

    let y = if ay >= bounds.y + height {
        ay - height
    } else if ay + 1 + height <= bounds.bottom() {
        ay + 1
    } else {
        return None;
    };

    Some(Rect::new(x, y, width, height))
}
