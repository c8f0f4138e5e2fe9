//! View state for the country list.

use crate::mvi::UiState;
use crate::repository::{Country, FilterType, RepositoryError};

/// Direction of a favorite change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// Transient confirmation shown after a favorite change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteNotification {
    pub change: FavoriteChange,
    pub name: String,
}

/// Everything the country list view renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountryListViewState {
    /// `None` until the first successful load.
    pub countries: Option<Vec<Country>>,
    pub filter: FilterType,
    pub in_progress: bool,
    pub error: Option<RepositoryError>,
    pub notification: Option<FavoriteNotification>,
}

impl UiState for CountryListViewState {}

impl CountryListViewState {
    /// Loaded countries that pass the current filter.
    pub fn visible_countries(&self) -> Vec<&Country> {
        self.countries
            .iter()
            .flatten()
            .filter(|country| self.filter.matches(country))
            .collect()
    }

    pub fn is_loaded(&self) -> bool {
        self.countries.is_some()
    }

    pub fn show_notification(&self) -> bool {
        self.notification.is_some()
    }
}
