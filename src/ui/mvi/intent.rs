//! Marker trait for widget actions.

/// A single action a widget can apply to its state.
///
/// One activation event (key press, mouse click) maps to exactly one intent.
pub trait Intent: Send + 'static {}
