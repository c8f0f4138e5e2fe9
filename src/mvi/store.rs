//! State store: the single owner of the current state.
//!
//! The store wires its action inbox through an [`ActionDispatcher`] and
//! folds the merged results into state on one reducer task. That task is
//! the only writer of the state cell, so reducer calls never overlap.
//! Observers read the cell through `tokio::sync::watch`, which hands every
//! new observer the latest state before any later update.

use futures::{Stream, StreamExt};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::{ReceiverStream, WatchStream};

use super::action::Action;
use super::dispatcher::{ActionDispatcher, ResultStream};
use super::error::{DispatchError, StoreError};
use super::reducer::Reducer;
use super::state::UiState;

/// Stream of published states.
///
/// Yields the current state immediately, then each later state. Rapid
/// updates may be coalesced; observers only ever miss intermediate states,
/// never the latest one.
pub type StateStream<S> = WatchStream<S>;

/// Owns the current state and the pipeline that updates it.
pub struct StateStore<A: Action, S: UiState> {
    inbox: mpsc::Sender<A>,
    state: watch::Receiver<S>,
    errors: broadcast::Sender<DispatchError>,
    worker: JoinHandle<S>,
}

impl<A: Action, S: UiState> StateStore<A, S> {
    /// Build the pipeline and start the reducer task.
    ///
    /// Must be called from within a Tokio runtime. `initial` is published
    /// before any result arrives.
    pub fn spawn<Rd>(
        dispatcher: ActionDispatcher<A, Rd::Result>,
        initial: S,
        capacity: usize,
    ) -> Self
    where
        Rd: Reducer<State = S> + 'static,
    {
        let capacity = capacity.max(1);
        let (inbox, actions) = mpsc::channel(capacity);
        let results = dispatcher.process(ReceiverStream::new(actions));
        let (state_cell, state) = watch::channel(initial);
        let (errors, _) = broadcast::channel(capacity);
        let worker = tokio::spawn(run_reducer::<Rd>(results, state_cell, errors.clone()));

        Self {
            inbox,
            state,
            errors,
            worker,
        }
    }

    /// Submit a single action.
    pub async fn dispatch(&self, action: A) -> Result<(), StoreError> {
        self.inbox
            .send(action)
            .await
            .map_err(|_| StoreError::Closed)
    }

    /// Forward every action of `actions` into the store.
    ///
    /// The returned task ends when `actions` ends. [`shutdown`](Self::shutdown)
    /// waits for all such tasks.
    pub fn process_actions<St>(&self, actions: St) -> JoinHandle<()>
    where
        St: Stream<Item = A> + Send + 'static,
    {
        let inbox = self.inbox.clone();
        tokio::spawn(async move {
            tokio::pin!(actions);
            while let Some(action) = actions.next().await {
                if inbox.send(action).await.is_err() {
                    tracing::trace!("Action dropped (store closed)");
                    break;
                }
            }
        })
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.state.borrow().clone()
    }

    /// Receiver for the state cell; `borrow()` on it yields the current state.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.clone()
    }

    /// Stream of states starting with the current one.
    pub fn states(&self) -> StateStream<S> {
        WatchStream::new(self.state.clone())
    }

    /// Subscribe to routing errors raised after this call.
    pub fn dispatch_errors(&self) -> broadcast::Receiver<DispatchError> {
        self.errors.subscribe()
    }

    /// Stop accepting actions, drain in-flight work and return the final state.
    ///
    /// Pending delayed results (such as resets) are still reduced before
    /// this returns.
    pub async fn shutdown(self) -> Result<S, StoreError> {
        let Self { inbox, worker, .. } = self;
        drop(inbox);
        worker
            .await
            .map_err(|err| StoreError::Worker(err.to_string()))
    }
}

async fn run_reducer<Rd: Reducer + 'static>(
    mut results: ResultStream<Rd::Result>,
    state: watch::Sender<Rd::State>,
    errors: broadcast::Sender<DispatchError>,
) -> Rd::State {
    let mut current = state.borrow().clone();

    while let Some(event) = results.next().await {
        match event {
            Ok(result) => {
                current = Rd::reduce(current, result);
                tracing::debug!(state = ?current, "state");
                state.send_replace(current.clone());
            }
            Err(error) => {
                tracing::error!(error = %error, "Dispatch error");
                if errors.send(error).is_err() {
                    tracing::trace!("Dispatch error not observed (no subscribers)");
                }
            }
        }
    }

    tracing::debug!("Result stream ended");
    current
}
