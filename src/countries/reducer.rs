use crate::mvi::Reducer;
use crate::repository::Country;

use super::result::{CountryListResult, FavoriteResult, LoadCountriesResult};
use super::state::{CountryListViewState, FavoriteChange, FavoriteNotification};

/// Reducer for country list state transitions.
///
/// Results of independent actions may arrive in any interleaving, so every
/// rule only looks at the result at hand and the fields it owns.
pub struct CountryListReducer;

impl Reducer for CountryListReducer {
    type State = CountryListViewState;
    type Result = CountryListResult;

    fn reduce(state: Self::State, result: Self::Result) -> Self::State {
        match result {
            CountryListResult::LoadCountries(result) => reduce_load(state, result),
            CountryListResult::AddToFavorite(result) => {
                reduce_favorite(state, FavoriteChange::Added, result)
            }
            CountryListResult::RemoveFromFavorite(result) => {
                reduce_favorite(state, FavoriteChange::Removed, result)
            }
        }
    }
}

fn reduce_load(state: CountryListViewState, result: LoadCountriesResult) -> CountryListViewState {
    match result {
        LoadCountriesResult::InProgress => CountryListViewState {
            in_progress: true,
            ..state
        },
        LoadCountriesResult::Success { countries, filter } => CountryListViewState {
            countries: Some(countries),
            filter,
            in_progress: false,
            error: None,
            ..state
        },
        // Keep the previously loaded list visible.
        LoadCountriesResult::Failure(error) => CountryListViewState {
            in_progress: false,
            error: Some(error),
            ..state
        },
    }
}

fn reduce_favorite(
    state: CountryListViewState,
    change: FavoriteChange,
    result: FavoriteResult,
) -> CountryListViewState {
    match result {
        FavoriteResult::InProgress => CountryListViewState {
            in_progress: true,
            ..state
        },
        FavoriteResult::Success { name } => {
            let favorite = change == FavoriteChange::Added;
            CountryListViewState {
                countries: state
                    .countries
                    .map(|countries| mark_favorite(countries, &name, favorite)),
                in_progress: false,
                notification: Some(FavoriteNotification { change, name }),
                ..state
            }
        }
        FavoriteResult::Failure(error) => CountryListViewState {
            in_progress: false,
            error: Some(error),
            ..state
        },
        FavoriteResult::Reset { name } => {
            let current = state
                .notification
                .as_ref()
                .is_some_and(|n| n.change == change && n.name == name);
            if current {
                CountryListViewState {
                    notification: None,
                    ..state
                }
            } else {
                // Superseded by a newer notification, or already cleared.
                state
            }
        }
    }
}

fn mark_favorite(mut countries: Vec<Country>, name: &str, favorite: bool) -> Vec<Country> {
    for country in countries.iter_mut().filter(|c| c.name == name) {
        country.is_favorite = favorite;
    }
    countries
}
