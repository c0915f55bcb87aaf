//! Headless rendering: apply a sequence of presses, then draw one frame to text.

use crate::ui::app::App;
use crate::ui::counter::Control;
use crate::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Invalid action '{ch}' at position {position}: expected '+' or '-'")]
    InvalidAction { ch: char, position: usize },
}

/// Parses `+`/`-` sequences such as `"++-"` or `"+ + -"`. Whitespace is skipped.
pub fn parse_actions(input: &str) -> Result<Vec<Control>, ReplayError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, ch)| match ch {
            '+' => Ok(Control::Increment),
            '-' => Ok(Control::Decrement),
            _ => Err(ReplayError::InvalidAction { ch, position }),
        })
        .collect()
}

/// Mounts a fresh Counter and presses each control in order.
pub fn replay(actions: &[Control]) -> App {
    let mut app = App::new();
    for control in actions {
        app.activate(*control);
    }
    app
}

/// Draws the app into an off-screen buffer and returns its rows as text,
/// right-trimmed, with trailing blank rows removed.
pub fn render_to_text(app: &mut App, width: u16, height: u16) -> io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))
        .map_err(|err| io::Error::other(err.to_string()))?;
    app.on_resize(width, height);
    terminal
        .draw(|frame| draw(frame, app))
        .map_err(|err| io::Error::other(err.to_string()))?;

    let buffer = terminal.backend().buffer();
    let mut lines: Vec<String> = buffer
        .content
        .chunks(usize::from(width.max(1)))
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    Ok(lines.join("\n"))
}
