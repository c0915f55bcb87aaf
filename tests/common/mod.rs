//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::path::PathBuf;
use tallyterm::replay::render_to_text;
use tallyterm::ui::app::App;
use tallyterm::ui::counter::Control;
use tempfile::TempDir;

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 16;

/// Renders one frame of the app at the default test size.
pub fn frame_text(app: &mut App) -> String {
    render_to_text(app, WIDTH, HEIGHT).expect("render")
}

pub fn press(app: &mut App, controls: &[Control]) {
    for control in controls {
        app.activate(*control);
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind_and_state(
        code,
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    )
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(body: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, body).expect("Failed to write config");
    (temp_dir, config_path)
}
