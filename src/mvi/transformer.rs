//! Core trait for per-kind action transformers.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::action::Action;
use super::error::DispatchError;
use super::result::{MviResult, ResultEvent};

/// Trait for turning actions of one kind into a sequence of results.
///
/// The dispatcher calls [`process`](ActionTransformer::process) once per
/// incoming action, each call on its own task, so several actions of the
/// same kind may be in flight at once. A transformer emits every result of
/// one action through the given [`ResultEmitter`], in order.
#[async_trait]
pub trait ActionTransformer: Send + Sync + 'static {
    /// The action type this transformer consumes.
    type Action: Action;

    /// The result type this transformer produces.
    type Result: MviResult;

    /// Returns the name of this transformer for logging.
    fn name(&self) -> &'static str;

    /// Resolve one action.
    ///
    /// Collaborator failures must be emitted as failure results; this method
    /// has no error channel of its own.
    async fn process(&self, action: Self::Action, emitter: ResultEmitter<Self::Result>);
}

/// Handle onto the merged result channel.
///
/// Cloning is cheap. The result stream stays open as long as any emitter
/// (including one held by a pending delayed emission) is alive.
pub struct ResultEmitter<R> {
    sender: mpsc::Sender<ResultEvent<R>>,
    source: &'static str,
}

impl<R> Clone for ResultEmitter<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            source: self.source,
        }
    }
}

impl<R: MviResult> ResultEmitter<R> {
    pub(crate) fn new(sender: mpsc::Sender<ResultEvent<R>>, source: &'static str) -> Self {
        Self { sender, source }
    }

    /// Name of the transformer this emitter belongs to.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Emit a result, waiting for channel capacity.
    pub async fn emit(&self, result: R) {
        tracing::debug!(transformer = self.source, result = ?result, "result");
        if self.sender.send(Ok(result)).await.is_err() {
            tracing::trace!(
                transformer = self.source,
                "Result dropped (result stream closed)"
            );
        }
    }

    /// Emit a result after `delay` without blocking the caller.
    ///
    /// The emission runs on its own timer task and is not cancelled by
    /// later actions.
    pub fn emit_after(&self, delay: Duration, result: R) -> JoinHandle<()> {
        let emitter = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            emitter.emit(result).await;
        })
    }

    /// Emit `first` now and `second` once `delay` has elapsed.
    pub async fn emit_pair_with_delay(&self, first: R, second: R, delay: Duration) {
        self.emit(first).await;
        self.emit_after(delay, second);
    }

    /// Emit a routing error onto the result stream.
    pub async fn reject(&self, error: DispatchError) {
        tracing::error!(transformer = self.source, error = %error, "action rejected");
        if self.sender.send(Err(error)).await.is_err() {
            tracing::trace!(
                transformer = self.source,
                "Rejection dropped (result stream closed)"
            );
        }
    }
}
