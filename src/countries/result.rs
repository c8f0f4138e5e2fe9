use crate::mvi::MviResult;
use crate::repository::{Country, FilterType, RepositoryError};

/// Everything the country list transformers can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum CountryListResult {
    LoadCountries(LoadCountriesResult),
    AddToFavorite(FavoriteResult),
    RemoveFromFavorite(FavoriteResult),
}

impl MviResult for CountryListResult {}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadCountriesResult {
    InProgress,
    Success {
        countries: Vec<Country>,
        filter: FilterType,
    },
    Failure(RepositoryError),
}

/// Results of adding or removing a favorite.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteResult {
    InProgress,
    Success { name: String },
    Failure(RepositoryError),
    /// Emitted a fixed delay after `Success` to clear the notification.
    Reset { name: String },
}
