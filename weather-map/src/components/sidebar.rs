use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{Component, ERROR_ICON, WeatherCard, WeatherCardProps, spinner};
use crate::action::Action;
use crate::state::AppState;

/// Side panel: instructions, selected point, fetch status and the weather card
pub struct Sidebar;

pub struct SidebarProps<'a> {
    pub state: &'a AppState,
}

impl Sidebar {
    pub const WIDTH: u16 = 42;

    fn lines(state: &AppState) -> Vec<Line<'static>> {
        let muted = Style::default().fg(Color::Gray);
        let mut lines = vec![
            Line::styled("Click anywhere on the map to see", muted),
            Line::styled("current weather for that point.", muted),
            Line::default(),
        ];

        if let Some(point) = state.selected {
            lines.push(Line::styled(
                "Selected point:",
                Style::default().fg(Color::White).bold(),
            ));
            lines.push(Line::raw(format!("  Lat: {:.4}", point.lat)));
            lines.push(Line::raw(format!("  Lng: {:.4}", point.lon)));
            lines.push(Line::default());
        }

        if state.is_loading {
            lines.push(Line::from(vec![
                Span::styled(spinner(state.tick_count), Style::default().fg(Color::Cyan)),
                Span::styled(" Loading weather...", muted),
            ]));
        }

        if let Some(error) = &state.error {
            lines.push(Line::styled(
                format!("{ERROR_ICON} {error}"),
                Style::default().fg(Color::Red),
            ));
        }

        if state.shows_hint() {
            let hint = Style::default().fg(Color::DarkGray).italic();
            lines.push(Line::styled("Tip: start by clicking", hint));
            lines.push(Line::styled("somewhere on the map 👆", hint));
        }

        lines
    }
}

impl Component<Action> for Sidebar {
    type Props<'a> = SidebarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" Weather Map ")
            .title_style(Style::default().fg(Color::Cyan).bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = Paragraph::new(Self::lines(state)).wrap(Wrap { trim: false });
        // Rows after wrapping, so a narrow sidebar pushes the card down instead of clipping
        let text_height = u16::try_from(text.line_count(inner.width)).unwrap_or(u16::MAX);
        let card_height = if state.weather.is_some() {
            WeatherCard::HEIGHT
        } else {
            0
        };
        let chunks = Layout::vertical([
            Constraint::Length(text_height),
            Constraint::Length(card_height),
            Constraint::Min(0),
        ])
        .split(inner);

        frame.render_widget(text, chunks[0]);

        if let Some(weather) = &state.weather {
            WeatherCard.render(frame, chunks[1], WeatherCardProps { weather });
        }
    }
}
