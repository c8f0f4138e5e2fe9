//! Action routing and result merging.
//!
//! The dispatcher consumes one mixed stream of actions and splits it into
//! one lane per registered kind. Each lane feeds its transformer, every
//! transformer writes into the same merged result channel, and actions of
//! an unregistered kind become [`DispatchError::UnknownAction`] events on
//! that channel instead of disappearing.

use std::collections::HashMap;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use super::action::Action;
use super::error::DispatchError;
use super::result::{MviResult, ResultEvent};
use super::transformer::{ActionTransformer, ResultEmitter};

/// Merged output of a dispatcher.
///
/// Ends once the input stream has ended and every in-flight action chain,
/// delayed emissions included, has finished.
pub type ResultStream<R> = ReceiverStream<ResultEvent<R>>;

type Route<A, R> = Arc<dyn ActionTransformer<Action = A, Result = R>>;

/// Routes actions to transformers by kind and merges their results.
pub struct ActionDispatcher<A: Action, R: MviResult> {
    routes: HashMap<A::Kind, Route<A, R>>,
    capacity: usize,
}

impl<A: Action, R: MviResult> ActionDispatcher<A, R> {
    /// Create an empty dispatcher whose channels hold up to `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            routes: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Register the transformer responsible for `kind`.
    ///
    /// Registering a kind twice replaces the earlier transformer.
    pub fn register<T>(mut self, kind: A::Kind, transformer: T) -> Self
    where
        T: ActionTransformer<Action = A, Result = R>,
    {
        let name = transformer.name();
        if let Some(previous) = self.routes.insert(kind, Arc::new(transformer)) {
            tracing::warn!(
                kind = ?kind,
                previous = previous.name(),
                replacement = name,
                "Transformer replaced"
            );
        }
        self
    }

    /// Whether a transformer is registered for `kind`.
    pub fn is_registered(&self, kind: A::Kind) -> bool {
        self.routes.contains_key(&kind)
    }

    /// Start routing `actions` and return the merged result stream.
    ///
    /// Must be called from within a Tokio runtime. Results of one action
    /// keep the order their transformer emitted them in; results of
    /// different actions interleave by timing.
    pub fn process<S>(&self, actions: S) -> ResultStream<R>
    where
        S: Stream<Item = A> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(self.capacity);

        let mut lanes = HashMap::with_capacity(self.routes.len());
        for (kind, transformer) in &self.routes {
            let (lane, lane_actions) = mpsc::channel(self.capacity);
            let emitter = ResultEmitter::new(sender.clone(), transformer.name());
            tokio::spawn(run_lane(Arc::clone(transformer), lane_actions, emitter));
            lanes.insert(*kind, lane);
        }

        tokio::spawn(route_actions(actions, lanes, sender));
        ReceiverStream::new(receiver)
    }
}

async fn route_actions<A, R, S>(
    actions: S,
    lanes: HashMap<A::Kind, mpsc::Sender<A>>,
    sender: mpsc::Sender<ResultEvent<R>>,
) where
    A: Action,
    R: MviResult,
    S: Stream<Item = A> + Send + 'static,
{
    tokio::pin!(actions);

    while let Some(action) = actions.next().await {
        let kind = action.kind();
        match lanes.get(&kind) {
            Some(lane) => {
                if lane.send(action).await.is_err() {
                    tracing::warn!(kind = ?kind, "Transformer lane closed, action dropped");
                }
            }
            None => {
                let error = DispatchError::UnknownAction {
                    action: format!("{action:?}"),
                };
                tracing::error!(error = %error, "No transformer registered");
                if sender.send(Err(error)).await.is_err() {
                    tracing::trace!("Dispatch error dropped (result stream closed)");
                }
            }
        }
    }

    tracing::debug!("Action stream ended");
}

async fn run_lane<A: Action, R: MviResult>(
    transformer: Route<A, R>,
    mut actions: mpsc::Receiver<A>,
    emitter: ResultEmitter<R>,
) {
    while let Some(action) = actions.recv().await {
        let transformer = Arc::clone(&transformer);
        let emitter = emitter.clone();
        tokio::spawn(async move {
            transformer.process(action, emitter).await;
        });
    }

    tracing::trace!(transformer = emitter.source(), "Transformer lane closed");
}
