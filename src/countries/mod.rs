//! Country list feature.
//!
//! Intents from the view become [`CountryListAction`]s, the interactor's
//! transformers resolve them against a [`CountryRepository`], and
//! [`CountryListReducer`] folds the results into [`CountryListViewState`].
//!
//! [`CountryRepository`]: crate::repository::CountryRepository

mod action;
mod intent;
mod interactor;
mod reducer;
mod result;
mod state;
mod transformers;
mod view_model;

pub use action::{CountryListAction, CountryListActionKind};
pub use intent::{CountryListIntent, ParseIntentError};
pub use interactor::CountryListInteractor;
pub use reducer::CountryListReducer;
pub use result::{CountryListResult, FavoriteResult, LoadCountriesResult};
pub use state::{CountryListViewState, FavoriteChange, FavoriteNotification};
pub use transformers::{FavoriteTransformer, LoadCountriesTransformer};
pub use view_model::CountryListViewModel;
