//! Reducer trait for the MVI layer.

use super::intent::Intent;
use super::state::UiState;

/// Transition function for one surface.
///
/// All state transitions go through a reducer, and `reduce` is pure:
/// same state plus same intent always gives the same next state.
pub trait Reducer {
    /// State owned by the surface this reducer serves.
    type State: UiState;

    /// Intents this reducer folds.
    type Intent: Intent;

    /// Fold one intent into the state and return the next state.
    ///
    /// No I/O and no side effects; the app performs effects around the
    /// dispatch.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
