use super::intent::Intent;
use super::state::UiState;

/// Turns the current state and an intent into the next state.
///
/// Implementations stay pure; spawning requests or notifying observers is
/// done by whoever dispatches.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
