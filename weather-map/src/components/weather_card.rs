use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherSnapshot;

/// Boxed summary of the current weather
pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub weather: &'a WeatherSnapshot,
}

impl WeatherCard {
    /// Four rows plus borders
    pub const HEIGHT: u16 = 6;
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let weather = props.weather;
        let label = Style::default().fg(Color::White).bold();
        let value = Style::default().fg(Color::Gray);

        let lines = vec![
            Line::from(vec![
                Span::styled("Temperature: ", label),
                Span::styled(
                    format!("{} °C", weather.temperature),
                    Style::default().fg(temp_to_color(weather.temperature)).bold(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Wind speed: ", label),
                Span::styled(format!("{} km/h", weather.wind_speed), value),
            ]),
            Line::from(vec![
                Span::styled("Direction: ", label),
                Span::styled(format!("{}°", weather.wind_direction), value),
            ]),
            Line::from(vec![
                Span::styled("Time: ", label),
                Span::styled(weather.time.clone(), value),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" Current weather ")
            .title_style(Style::default().fg(Color::Cyan).bold());

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Get temperature-based color
fn temp_to_color(celsius: f64) -> Color {
    match celsius as i32 {
        ..=-10 => Color::Rgb(150, 200, 255),  // Very cold - light blue
        -9..=0 => Color::Rgb(100, 180, 255),  // Cold - blue
        1..=10 => Color::Rgb(100, 220, 200),  // Cool - cyan
        11..=20 => Color::Rgb(150, 230, 150), // Mild - green
        21..=30 => Color::Rgb(255, 220, 100), // Warm - yellow
        31..=40 => Color::Rgb(255, 150, 80),  // Hot - orange
        _ => Color::Rgb(255, 100, 100),       // Very hot - red
    }
}
