//! Reducer trait for MVI architecture.

use super::result::MviResult;
use super::state::UiState;

/// Reducer transforms state based on results.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Result) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The result type this reducer handles.
    type Result: MviResult;

    /// Process a result and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, result: Self::Result) -> Self::State;
}
