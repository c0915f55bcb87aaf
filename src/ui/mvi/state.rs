//! Marker trait for widget state.

/// State owned by one widget instance.
///
/// `Default` is the value the widget is mounted with; `PartialEq` lets the
/// host skip redraws when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
