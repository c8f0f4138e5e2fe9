//! Country data access.
//!
//! The engine only depends on the [`CountryRepository`] trait. Calls are
//! blocking and are always made from Tokio's blocking pool.

mod error;
mod memory;

use serde::{Deserialize, Serialize};

pub use error::RepositoryError;
pub use memory::InMemoryCountryRepository;

/// A country as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default, rename = "favorite")]
    pub is_favorite: bool,
}

impl Country {
    pub fn new(name: impl Into<String>, capital: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            is_favorite: false,
        }
    }
}

/// Which countries a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    All,
    Favorites,
}

impl FilterType {
    pub fn matches(self, country: &Country) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Favorites => country.is_favorite,
        }
    }
}

/// Source of country data and favorite flags.
///
/// Implementations may block (disk, network). Timeouts are the
/// implementation's concern and must be reported as errors.
pub trait CountryRepository: Send + Sync + 'static {
    /// Fetch every known country.
    fn fetch_all(&self) -> Result<Vec<Country>, RepositoryError>;

    /// Mark the country named `name` as favorite.
    fn add_favorite(&self, name: &str) -> Result<(), RepositoryError>;

    /// Clear the favorite mark of the country named `name`.
    fn remove_favorite(&self, name: &str) -> Result<(), RepositoryError>;
}
