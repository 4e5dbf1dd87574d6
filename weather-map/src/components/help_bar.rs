use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub struct HelpBar;

pub struct HelpBarProps;

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let key = Style::default().fg(Color::Cyan).bold();
        let text = Style::default().fg(Color::DarkGray);

        let help = Line::from(vec![
            Span::styled(" click", key),
            Span::styled(" select point  ", text),
            Span::styled("←↑↓→", key),
            Span::styled(" pan  ", text),
            Span::styled("+/-", key),
            Span::styled(" zoom  ", text),
            Span::styled("q", key),
            Span::styled(" quit ", text),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
