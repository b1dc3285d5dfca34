//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Pure state transition function: `(State, Intent) -> State`.
///
/// Reducers never touch timers, storage or the terminal; callers compare
/// the state before and after and perform those effects themselves.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents, oldest first.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
