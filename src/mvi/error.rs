//! Error types for the action pipeline.

use thiserror::Error;

/// Routing errors surfaced on the result stream.
///
/// These indicate wiring mistakes (an action kind without a transformer),
/// not failures of the work itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No transformer is registered for the action's kind.
    #[error("Unknown action type: {action}")]
    UnknownAction { action: String },

    /// A transformer received an action of a kind it does not handle.
    #[error("Transformer '{transformer}' cannot handle action: {action}")]
    Misrouted {
        transformer: &'static str,
        action: String,
    },
}

/// Errors returned by [`StateStore`](super::StateStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store no longer accepts actions.
    #[error("State store is closed")]
    Closed,

    /// The reducer task terminated abnormally.
    #[error("Reducer task failed: {0}")]
    Worker(String),
}
