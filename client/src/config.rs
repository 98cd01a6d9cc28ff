use std::time::Duration;

use crate::POKEAPI_URL;

/// Settings for a catalog load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Species fetched at the same time
    pub concurrency: usize,
    /// Highest dex number requested, whatever the upstream count says
    pub max_species: u32,
    /// Overall deadline; species not loaded by then are counted as failed
    pub timeout: Option<Duration>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            concurrency: 32,
            max_species: 1010,
            timeout: None,
        }
    }
}

impl LoaderConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_max_species(mut self, max_species: u32) -> Self {
        self.max_species = max_species;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
