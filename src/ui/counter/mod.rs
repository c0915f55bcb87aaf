//! The Counter widget: one integer, two controls that move it by one.

mod control;
mod intent;
mod reducer;
mod state;
mod view;

pub use control::{ButtonVariant, Control};
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{CounterLayout, CounterView, DESCRIPTION};
