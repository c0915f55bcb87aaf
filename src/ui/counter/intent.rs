use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// `count + 1`, no upper bound.
    Increment,
    /// `count - 1`, negatives are valid.
    Decrement,
}

impl Intent for CounterIntent {}
