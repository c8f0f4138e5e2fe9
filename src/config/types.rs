use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::repository::Country;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
}

/// Settings for the action pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Delay between a favorite change succeeding and its notification
    /// being cleared, in milliseconds (default: 2000).
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
    /// Capacity of the action and result channels (default: 64).
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

/// Settings for the in-memory country repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Simulated latency of every repository call in milliseconds (default: 0).
    #[serde(default)]
    pub latency_ms: u64,
    /// Countries the repository starts with.
    #[serde(default = "default_countries")]
    pub countries: Vec<Country>,
}

fn default_reset_delay_ms() -> u64 {
    2000
}

fn default_channel_capacity() -> usize {
    64
}

fn default_countries() -> Vec<Country> {
    [
        ("Czechia", "Prague"),
        ("Slovakia", "Bratislava"),
        ("Austria", "Vienna"),
        ("Poland", "Warsaw"),
        ("Hungary", "Budapest"),
    ]
    .into_iter()
    .map(|(name, capital)| Country::new(name, capital))
    .collect()
}

impl EngineConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            countries: default_countries(),
        }
    }
}
