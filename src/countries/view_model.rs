use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::config::EngineConfig;
use crate::mvi::{DispatchError, StateStore, StateStream, StoreError};
use crate::repository::CountryRepository;

use super::action::CountryListAction;
use super::intent::CountryListIntent;
use super::interactor::CountryListInteractor;
use super::reducer::CountryListReducer;
use super::state::CountryListViewState;

/// Entry point for a country list view.
///
/// Outlives any single view: a view that reattaches calls
/// [`states`](Self::states) again and immediately receives the current
/// state.
pub struct CountryListViewModel {
    store: StateStore<CountryListAction, CountryListViewState>,
}

impl CountryListViewModel {
    /// Must be called from within a Tokio runtime.
    pub fn new(repository: Arc<dyn CountryRepository>, config: &EngineConfig) -> Self {
        let dispatcher = CountryListInteractor::dispatcher(repository, config);
        let store = StateStore::spawn::<CountryListReducer>(
            dispatcher,
            CountryListViewState::default(),
            config.channel_capacity,
        );
        Self { store }
    }

    /// Translate `intents` into actions and feed them to the store.
    pub fn process_intents<S>(&self, intents: S) -> JoinHandle<()>
    where
        S: Stream<Item = CountryListIntent> + Send + 'static,
    {
        self.store
            .process_actions(intents.map(CountryListAction::from))
    }

    pub async fn dispatch(&self, intent: CountryListIntent) -> Result<(), StoreError> {
        self.store.dispatch(intent.into()).await
    }

    pub fn state(&self) -> CountryListViewState {
        self.store.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CountryListViewState> {
        self.store.subscribe()
    }

    pub fn states(&self) -> StateStream<CountryListViewState> {
        self.store.states()
    }

    pub fn dispatch_errors(&self) -> broadcast::Receiver<DispatchError> {
        self.store.dispatch_errors()
    }

    /// Drain in-flight work and return the final state.
    pub async fn shutdown(self) -> Result<CountryListViewState, StoreError> {
        self.store.shutdown().await
    }
}
