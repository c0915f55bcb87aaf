use crate::config::KeyBindings;
use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent, bindings: &KeyBindings) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up => app.increment(),
        KeyCode::Down => app.decrement(),
        KeyCode::Tab | KeyCode::Right => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Char(ch) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            tracing::trace!(%ch, "Ignoring control chord");
        }
        KeyCode::Char(ch) if bindings.is_increment(ch) => app.increment(),
        KeyCode::Char(ch) if bindings.is_decrement(ch) => app.decrement(),
        _ => {}
    }
}

/// Left-button presses on a button press it; everything else is ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    app.on_click(mouse.column, mouse.row);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
