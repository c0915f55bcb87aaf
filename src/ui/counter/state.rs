use crate::ui::mvi::UiState;
use num_bigint::BigInt;

/// Local state of one Counter instance. Starts at zero when mounted.
///
/// The count is arbitrary precision, so it never wraps or clamps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    count: BigInt,
}

impl UiState for CounterState {}

impl CounterState {
    /// State positioned at an arbitrary value. The widget itself always
    /// mounts with `CounterState::default()`.
    pub fn starting_at(count: impl Into<BigInt>) -> Self {
        Self {
            count: count.into(),
        }
    }

    pub fn count(&self) -> &BigInt {
        &self.count
    }

    /// Text of the heading line, e.g. `Count: -1`.
    pub fn heading(&self) -> String {
        format!("Count: {}", self.count)
    }
}
