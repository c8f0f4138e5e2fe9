//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use countries_mvi::config::EngineConfig;
use countries_mvi::countries::{
    CountryListAction, CountryListResult, FavoriteResult, LoadCountriesResult,
};
use countries_mvi::mvi::{ActionDispatcher, ResultEvent};
use countries_mvi::repository::{Country, CountryRepository, RepositoryError};
use futures::StreamExt;
use parking_lot::Mutex;

/// Upper bound for any single test pipeline to drain.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

pub fn czechia_and_slovakia() -> Vec<Country> {
    vec![
        Country::new("Czechia", "Prague"),
        Country::new("Slovakia", "Bratislava"),
    ]
}

pub fn engine_config(reset_delay_ms: u64) -> EngineConfig {
    EngineConfig {
        reset_delay_ms,
        channel_capacity: 16,
    }
}

// -- Repository mock ----------------------------------------------------------

/// Repository with scripted failures and call counting.
pub struct ScriptedRepository {
    countries: Mutex<Vec<Country>>,
    fetch_failures: Mutex<VecDeque<RepositoryError>>,
    favorite_failures: Mutex<HashMap<String, RepositoryError>>,
    panic_on_fetch: AtomicBool,
    latency: Duration,
    fetch_calls: AtomicUsize,
    favorite_calls: AtomicUsize,
}

impl ScriptedRepository {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries: Mutex::new(countries),
            fetch_failures: Mutex::new(VecDeque::new()),
            favorite_failures: Mutex::new(HashMap::new()),
            panic_on_fetch: AtomicBool::new(false),
            latency: Duration::ZERO,
            fetch_calls: AtomicUsize::new(0),
            favorite_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The next `fetch_all` call fails with `error`.
    pub fn fail_next_fetch(&self, error: RepositoryError) {
        self.fetch_failures.lock().push_back(error);
    }

    /// Every favorite change of `name` fails with `error`.
    pub fn fail_favorite(&self, name: &str, error: RepositoryError) {
        self.favorite_failures.lock().insert(name.to_string(), error);
    }

    pub fn panic_on_fetch(&self) {
        self.panic_on_fetch.store(true, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn favorite_calls(&self) -> usize {
        self.favorite_calls.load(Ordering::SeqCst)
    }

    fn set_favorite(&self, name: &str, favorite: bool) -> Result<(), RepositoryError> {
        self.favorite_calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        if let Some(error) = self.favorite_failures.lock().get(name) {
            return Err(error.clone());
        }
        let mut countries = self.countries.lock();
        let country = countries
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| RepositoryError::NotFound {
                name: name.to_string(),
            })?;
        country.is_favorite = favorite;
        Ok(())
    }
}

impl CountryRepository for ScriptedRepository {
    fn fetch_all(&self) -> Result<Vec<Country>, RepositoryError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        if self.panic_on_fetch.load(Ordering::SeqCst) {
            panic!("scripted repository panic");
        }
        if let Some(error) = self.fetch_failures.lock().pop_front() {
            return Err(error);
        }
        Ok(self.countries.lock().clone())
    }

    fn add_favorite(&self, name: &str) -> Result<(), RepositoryError> {
        self.set_favorite(name, true)
    }

    fn remove_favorite(&self, name: &str) -> Result<(), RepositoryError> {
        self.set_favorite(name, false)
    }
}

// -- Result collection --------------------------------------------------------

/// Run `actions` through `dispatcher` and collect every event until the
/// result stream ends.
pub async fn collect_results(
    dispatcher: &ActionDispatcher<CountryListAction, CountryListResult>,
    actions: Vec<CountryListAction>,
) -> Vec<ResultEvent<CountryListResult>> {
    let stream = dispatcher.process(futures::stream::iter(actions));
    tokio::time::timeout(DRAIN_TIMEOUT, stream.collect::<Vec<_>>())
        .await
        .expect("result stream did not end")
}

pub fn load_results(events: &[ResultEvent<CountryListResult>]) -> Vec<LoadCountriesResult> {
    events
        .iter()
        .filter_map(|event| match event {
            Ok(CountryListResult::LoadCountries(result)) => Some(result.clone()),
            _ => None,
        })
        .collect()
}

pub fn add_results(events: &[ResultEvent<CountryListResult>]) -> Vec<FavoriteResult> {
    events
        .iter()
        .filter_map(|event| match event {
            Ok(CountryListResult::AddToFavorite(result)) => Some(result.clone()),
            _ => None,
        })
        .collect()
}

pub fn remove_results(events: &[ResultEvent<CountryListResult>]) -> Vec<FavoriteResult> {
    events
        .iter()
        .filter_map(|event| match event {
            Ok(CountryListResult::RemoveFromFavorite(result)) => Some(result.clone()),
            _ => None,
        })
        .collect()
}

/// Named favorite results (`Success` and `Reset`) for `name`, in emission order.
pub fn favorite_results_for(results: &[FavoriteResult], name: &str) -> Vec<FavoriteResult> {
    results
        .iter()
        .filter(|result| match result {
            FavoriteResult::Success { name: n } | FavoriteResult::Reset { name: n } => n == name,
            _ => false,
        })
        .cloned()
        .collect()
}
