//! Base trait for actions in MVI architecture.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for action objects.
///
/// Actions represent requests for asynchronous work:
/// - Data loads (fetch a list)
/// - Mutations (toggle a favorite)
///
/// Every action reports its [`Action::Kind`], which the dispatcher uses to
/// route it to the transformer registered for that kind.
pub trait Action: Debug + Send + 'static {
    /// Routing key identifying the action variant.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// The routing key of this action.
    fn kind(&self) -> Self::Kind;
}
