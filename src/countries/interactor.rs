use std::sync::Arc;

use crate::config::EngineConfig;
use crate::mvi::ActionDispatcher;
use crate::repository::CountryRepository;

use super::action::{CountryListAction, CountryListActionKind};
use super::result::CountryListResult;
use super::transformers::{FavoriteTransformer, LoadCountriesTransformer};

/// Wires the country list transformers into a dispatcher.
pub struct CountryListInteractor;

impl CountryListInteractor {
    /// Dispatcher with a transformer registered for every action kind.
    pub fn dispatcher(
        repository: Arc<dyn CountryRepository>,
        config: &EngineConfig,
    ) -> ActionDispatcher<CountryListAction, CountryListResult> {
        let reset_delay = config.reset_delay();

        ActionDispatcher::new(config.channel_capacity)
            .register(
                CountryListActionKind::LoadCountries,
                LoadCountriesTransformer::new(Arc::clone(&repository)),
            )
            .register(
                CountryListActionKind::AddToFavorite,
                FavoriteTransformer::add(Arc::clone(&repository), reset_delay),
            )
            .register(
                CountryListActionKind::RemoveFromFavorite,
                FavoriteTransformer::remove(repository, reset_delay),
            )
    }
}
