//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Applies intents to state.
///
/// The reducer is the only place state transitions happen: `(State, Intent) -> State`,
/// with no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
