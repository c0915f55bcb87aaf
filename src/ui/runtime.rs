use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Mounts the Counter on the terminal and runs until the user quits.
///
/// Events are applied one at a time on this thread; each one is followed by a redraw.
pub fn run(config: &Config, mouse: bool) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(mouse)?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(
        tick_rate_ms = config.ui.tick_rate_ms,
        mouse,
        "Counter mounted"
    );

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, &config.keys),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
