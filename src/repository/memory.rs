//! In-memory repository used by the binary and tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::RwLock;

use crate::config::RepositoryConfig;

use super::{Country, CountryRepository, RepositoryError};

/// Thread-safe country list held in memory.
///
/// Optional latency simulates slow storage; the offline switch makes every
/// call fail with [`RepositoryError::Unavailable`].
pub struct InMemoryCountryRepository {
    countries: RwLock<Vec<Country>>,
    latency: Duration,
    offline: AtomicBool,
}

impl InMemoryCountryRepository {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries: RwLock::new(countries),
            latency: Duration::ZERO,
            offline: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &RepositoryConfig) -> Self {
        Self::new(config.countries.clone()).with_latency(Duration::from_millis(config.latency_ms))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Toggle simulated unavailability.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn begin_call(&self) -> Result<(), RepositoryError> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable {
                reason: "repository is offline".to_string(),
            });
        }
        Ok(())
    }

    fn set_favorite(&self, name: &str, favorite: bool) -> Result<(), RepositoryError> {
        self.begin_call()?;
        let mut countries = self.countries.write();
        let country = countries
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| RepositoryError::NotFound {
                name: name.to_string(),
            })?;
        country.is_favorite = favorite;
        tracing::debug!(country = %name, favorite, "Favorite updated");
        Ok(())
    }
}

impl CountryRepository for InMemoryCountryRepository {
    fn fetch_all(&self) -> Result<Vec<Country>, RepositoryError> {
        self.begin_call()?;
        Ok(self.countries.read().clone())
    }

    fn add_favorite(&self, name: &str) -> Result<(), RepositoryError> {
        self.set_favorite(name, true)
    }

    fn remove_favorite(&self, name: &str) -> Result<(), RepositoryError> {
        self.set_favorite(name, false)
    }
}
