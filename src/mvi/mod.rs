//! Model-View-Intent (MVI) engine primitives.
//!
//! This module provides the generic pieces of a unidirectional data flow:
//! actions are routed to per-kind transformers, transformers emit results,
//! and results are folded into state on a single reducer task.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Dispatcher ──→ Transformer ──→ Result ──→ Reducer ──→ State
//!    ↑                                                              │
//!    └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Action**: Request for work, routed by its kind
//! - **Result**: Progress, success, failure or reset event produced while resolving an action
//! - **Reducer**: Pure function that folds a result into the previous state
//! - **State**: Immutable snapshot published to observers

mod action;
mod dispatcher;
mod error;
mod reducer;
mod result;
mod state;
mod store;
mod transformer;

pub use action::Action;
pub use dispatcher::{ActionDispatcher, ResultStream};
pub use error::{DispatchError, StoreError};
pub use reducer::Reducer;
pub use result::{MviResult, ResultEvent};
pub use state::UiState;
pub use store::{StateStore, StateStream};
pub use transformer::{ActionTransformer, ResultEmitter};
