//! Test utilities
//!
//! - [`key`]: Create a `KeyEvent` from a name (e.g. `key("esc")`, `key("+")`)
//! - [`left_click`]: Left button press as the runtime delivers it
//! - [`RenderHarness`]: Render into a `TestBackend` and read the buffer back as text

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Frame, Terminal, backend::TestBackend};

use crate::runtime::EventKind;

/// Create a `KeyEvent` from a key name.
///
/// Accepts arrow and control key names (`"up"`, `"esc"`, `"enter"`, ...) or
/// any single character.
///
/// # Panics
///
/// Panics if the name is not recognized.
pub fn key(name: &str) -> KeyEvent {
    let mut chars = name.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match name.to_lowercase().as_str() {
            "esc" | "escape" => KeyCode::Esc,
            "enter" | "return" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            _ => panic!("Invalid key string: {:?}", name),
        },
    };

    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Left button press at a terminal cell
pub fn left_click(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row))
}

/// Renders into an in-memory terminal for assertions on the output
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("test terminal: {e}"));
        Self { terminal }
    }

    /// Draw one frame and return the buffer as plain text, one line per row
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(render)
            .unwrap_or_else(|e| panic!("test draw: {e}"));

        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }
}
