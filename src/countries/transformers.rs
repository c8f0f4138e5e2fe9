//! Transformers resolving country list actions against the repository.
//!
//! Repository calls block, so each one runs on Tokio's blocking pool. A
//! panicking call is reported as [`RepositoryError::Worker`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::mvi::{ActionTransformer, DispatchError, ResultEmitter};
use crate::repository::{CountryRepository, RepositoryError};

use super::action::CountryListAction;
use super::result::{CountryListResult, FavoriteResult, LoadCountriesResult};
use super::state::FavoriteChange;

/// Resolves [`CountryListAction::LoadCountries`].
///
/// Emits `InProgress` followed by exactly one `Success` or `Failure`.
pub struct LoadCountriesTransformer {
    repository: Arc<dyn CountryRepository>,
}

impl LoadCountriesTransformer {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ActionTransformer for LoadCountriesTransformer {
    type Action = CountryListAction;
    type Result = CountryListResult;

    fn name(&self) -> &'static str {
        "load_countries"
    }

    async fn process(&self, action: CountryListAction, emitter: ResultEmitter<CountryListResult>) {
        let filter = match action {
            CountryListAction::LoadCountries { filter } => filter,
            other => {
                emitter.reject(misrouted(self.name(), &other)).await;
                return;
            }
        };

        // The fetch is already running while InProgress is queued.
        let repository = Arc::clone(&self.repository);
        let fetch = tokio::task::spawn_blocking(move || repository.fetch_all());
        emitter
            .emit(CountryListResult::LoadCountries(LoadCountriesResult::InProgress))
            .await;

        let result = match join_call(fetch).await {
            Ok(countries) => LoadCountriesResult::Success { countries, filter },
            Err(error) => LoadCountriesResult::Failure(error),
        };
        emitter.emit(CountryListResult::LoadCountries(result)).await;
    }
}

/// Resolves [`CountryListAction::AddToFavorite`] or
/// [`CountryListAction::RemoveFromFavorite`], depending on `change`.
///
/// Emits `InProgress`, then either `Success` followed by `Reset` after
/// `reset_delay`, or `Failure`.
pub struct FavoriteTransformer {
    repository: Arc<dyn CountryRepository>,
    change: FavoriteChange,
    reset_delay: Duration,
}

impl FavoriteTransformer {
    pub fn add(repository: Arc<dyn CountryRepository>, reset_delay: Duration) -> Self {
        Self {
            repository,
            change: FavoriteChange::Added,
            reset_delay,
        }
    }

    pub fn remove(repository: Arc<dyn CountryRepository>, reset_delay: Duration) -> Self {
        Self {
            repository,
            change: FavoriteChange::Removed,
            reset_delay,
        }
    }

    fn wrap(&self, result: FavoriteResult) -> CountryListResult {
        match self.change {
            FavoriteChange::Added => CountryListResult::AddToFavorite(result),
            FavoriteChange::Removed => CountryListResult::RemoveFromFavorite(result),
        }
    }
}

#[async_trait]
impl ActionTransformer for FavoriteTransformer {
    type Action = CountryListAction;
    type Result = CountryListResult;

    fn name(&self) -> &'static str {
        match self.change {
            FavoriteChange::Added => "add_to_favorite",
            FavoriteChange::Removed => "remove_from_favorite",
        }
    }

    async fn process(&self, action: CountryListAction, emitter: ResultEmitter<CountryListResult>) {
        let name = match (self.change, action) {
            (FavoriteChange::Added, CountryListAction::AddToFavorite { name })
            | (FavoriteChange::Removed, CountryListAction::RemoveFromFavorite { name }) => name,
            (_, other) => {
                emitter.reject(misrouted(self.name(), &other)).await;
                return;
            }
        };

        emitter.emit(self.wrap(FavoriteResult::InProgress)).await;

        let repository = Arc::clone(&self.repository);
        let change = self.change;
        let target = name.clone();
        let mutation = tokio::task::spawn_blocking(move || match change {
            FavoriteChange::Added => repository.add_favorite(&target),
            FavoriteChange::Removed => repository.remove_favorite(&target),
        });

        match join_call(mutation).await {
            Ok(()) => {
                emitter
                    .emit_pair_with_delay(
                        self.wrap(FavoriteResult::Success { name: name.clone() }),
                        self.wrap(FavoriteResult::Reset { name }),
                        self.reset_delay,
                    )
                    .await;
            }
            Err(error) => {
                emitter.emit(self.wrap(FavoriteResult::Failure(error))).await;
            }
        }
    }
}

async fn join_call<T>(call: JoinHandle<Result<T, RepositoryError>>) -> Result<T, RepositoryError> {
    call.await
        .unwrap_or_else(|err| Err(RepositoryError::Worker(err.to_string())))
}

fn misrouted(transformer: &'static str, action: &CountryListAction) -> DispatchError {
    DispatchError::Misrouted {
        transformer,
        action: format!("{action:?}"),
    }
}
