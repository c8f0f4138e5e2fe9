//! Base trait for results in MVI architecture.

use std::fmt::Debug;

use super::error::DispatchError;

/// Marker trait for result objects.
///
/// Results are emitted by transformers and carry everything the reducer
/// needs to compute the next state. Failures are results too.
pub trait MviResult: Debug + Clone + Send + 'static {}

/// One item of the merged result stream.
///
/// `Err` is reserved for routing problems; collaborator failures travel
/// inside `Ok` as failure results.
pub type ResultEvent<R> = Result<R, DispatchError>;
