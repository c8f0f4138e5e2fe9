use thiserror::Error;

/// Errors reported by a [`CountryRepository`](super::CountryRepository).
///
/// Clone + PartialEq so the error can be stored in view state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Country '{name}' not found")]
    NotFound { name: String },

    #[error("Repository unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Repository timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    /// The worker running the call panicked or was cancelled.
    #[error("Repository worker failed: {0}")]
    Worker(String),
}
