use crate::mvi::Action;
use crate::repository::FilterType;

use super::intent::CountryListIntent;

/// Work the country list can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryListAction {
    /// Fetch all countries; `filter` is handed through to the reducer.
    LoadCountries { filter: FilterType },
    AddToFavorite { name: String },
    RemoveFromFavorite { name: String },
}

/// Routing key of a [`CountryListAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryListActionKind {
    LoadCountries,
    AddToFavorite,
    RemoveFromFavorite,
}

impl Action for CountryListAction {
    type Kind = CountryListActionKind;

    fn kind(&self) -> Self::Kind {
        match self {
            Self::LoadCountries { .. } => CountryListActionKind::LoadCountries,
            Self::AddToFavorite { .. } => CountryListActionKind::AddToFavorite,
            Self::RemoveFromFavorite { .. } => CountryListActionKind::RemoveFromFavorite,
        }
    }
}

impl From<CountryListIntent> for CountryListAction {
    fn from(intent: CountryListIntent) -> Self {
        match intent {
            CountryListIntent::Initial => Self::LoadCountries {
                filter: FilterType::All,
            },
            CountryListIntent::ChangeFilter(filter) => Self::LoadCountries { filter },
            CountryListIntent::AddToFavorite { name } => Self::AddToFavorite { name },
            CountryListIntent::RemoveFromFavorite { name } => Self::RemoveFromFavorite { name },
        }
    }
}
