use crate::ui::counter::{Control, CounterIntent, CounterLayout, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;
use num_bigint::BigInt;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Host shell around a single mounted Counter.
///
/// The Counter's state lives here for exactly as long as the `App` does and
/// is only ever replaced through [`CounterReducer`].
pub struct App {
    should_quit: bool,
    counter: CounterState,
    /// Control that Enter/Space presses.
    focus: Control,
    /// Button rects from the last draw, for mouse hit-testing.
    last_layout: Option<CounterLayout>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            counter: CounterState::default(),
            focus: Control::default(),
            last_layout: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!(count = %self.counter.count(), "Quit requested");
        self.should_quit = true;
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn count(&self) -> &BigInt {
        self.counter.count()
    }

    pub fn heading(&self) -> String {
        self.counter.heading()
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn increment(&mut self) {
        self.dispatch_counter(CounterIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch_counter(CounterIntent::Decrement);
    }

    /// Press a control: one activation, one state update.
    pub fn activate(&mut self, control: Control) {
        self.dispatch_counter(control.intent());
    }

    pub fn activate_focused(&mut self) {
        self.activate(self.focus);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.toggled();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.toggled();
    }

    /// Mouse press at a screen cell. Returns true if it landed on a button.
    pub fn on_click(&mut self, column: u16, row: u16) -> bool {
        let Some(control) = self
            .last_layout
            .and_then(|layout| layout.control_at(column, row))
        else {
            return false;
        };
        self.focus = control;
        self.activate(control);
        true
    }

    /// Records where the Counter was last drawn.
    pub fn set_layout(&mut self, layout: CounterLayout) {
        self.last_layout = Some(layout);
    }

    pub fn on_tick(&mut self) {}

    /// The terminal changed size; button rects are stale until the next draw.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::debug!(cols, rows, "Terminal resized");
        self.last_layout = None;
    }

    fn dispatch_counter(&mut self, intent: CounterIntent) {
        let before = self.counter.count().clone();
        dispatch_mvi!(self, counter, CounterReducer, intent);
        tracing::debug!(
            ?intent,
            %before,
            after = %self.counter.count(),
            "Counter updated"
        );
    }
}
