use std::pin::pin;

use anyhow::{Context, Result, ensure};
use futures_util::{StreamExt, stream};
use pokego_catalog::{Catalog, Species, normalize};
use tokio::time::{Instant, timeout_at};

use crate::config::LoaderConfig;
use crate::source::{PokeApi, SpeciesSource};

/// Outcome counts of a finished load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub requested: usize,
    pub loaded: usize,
}

impl LoadReport {
    pub fn failed(&self) -> usize {
        self.requested.saturating_sub(self.loaded)
    }

    pub fn is_complete(&self) -> bool {
        self.loaded == self.requested
    }
}

/// Progress of a running load, reported after every settled species
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadProgress {
    pub requested: usize,
    pub settled: usize,
    pub succeeded: usize,
}

impl LoadProgress {
    /// Settled share of the load in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.requested == 0 {
            return 1.0;
        }
        self.settled as f64 / self.requested as f64
    }
}

/// A loaded snapshot together with its counts
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub report: LoadReport,
}

/// Fetches and normalizes every species into a fresh [`Catalog`].
///
/// Each call re-fetches everything; nothing is cached between loads.
pub struct Loader<S> {
    source: S,
    config: LoaderConfig,
}

impl Loader<PokeApi> {
    /// Loader backed by PokeAPI at `config.base_url`
    pub fn pokeapi(config: LoaderConfig) -> Self {
        let source = PokeApi::new(config.base_url.clone());
        Self::new(source, config)
    }
}

impl<S: SpeciesSource> Loader<S> {
    pub fn new(source: S, config: LoaderConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the whole catalog. Never fails: species that cannot be fetched or
    /// normalized are left out and show up in the report.
    pub async fn load_all(&self) -> LoadOutcome {
        self.load_all_with_progress(|_| {}).await
    }

    /// Like [`Loader::load_all`], calling `on_progress` after every species
    /// settles
    pub async fn load_all_with_progress<F>(&self, mut on_progress: F) -> LoadOutcome
    where
        F: FnMut(LoadProgress),
    {
        let count = match self.source.species_count().await {
            Ok(count) => count.min(self.config.max_species),
            Err(e) => {
                tracing::warn!(error = %format_args!("{e:#}"), "Failed to discover species count");
                return LoadOutcome::default();
            }
        };

        let requested = count as usize;
        tracing::info!(requested, concurrency = self.config.concurrency, "Loading catalog");

        let deadline = self.config.timeout.map(|t| Instant::now() + t);
        let mut units = pin!(
            stream::iter(1..=count)
                .map(|id| async move { (id, self.load_one(id).await) })
                .buffer_unordered(self.config.concurrency.max(1))
        );

        let mut progress = LoadProgress {
            requested,
            ..Default::default()
        };
        let mut species: Vec<Species> = Vec::with_capacity(requested);

        loop {
            let next = match deadline {
                Some(deadline) => match timeout_at(deadline, units.next()).await {
                    Ok(next) => next,
                    Err(_) => {
                        tracing::warn!(
                            settled = progress.settled,
                            requested,
                            "Catalog load timed out, dropping unsettled species"
                        );
                        break;
                    }
                },
                None => units.next().await,
            };

            let Some((id, result)) = next else {
                break;
            };

            progress.settled += 1;
            match result {
                Ok(entry) => {
                    progress.succeeded += 1;
                    species.push(entry);
                }
                Err(e) => {
                    tracing::warn!(id, error = %format_args!("{e:#}"), "Skipping species");
                }
            }
            on_progress(progress);
        }

        let catalog = Catalog::new(species);
        let report = LoadReport {
            requested,
            loaded: catalog.len(),
        };
        tracing::info!(
            loaded = report.loaded,
            requested = report.requested,
            "Catalog loaded"
        );

        LoadOutcome { catalog, report }
    }

    /// Fetch one species with its detail and evolution chain, then normalize.
    ///
    /// Only the species record itself is required; a failed detail or chain
    /// fetch degrades the entry instead of failing it.
    async fn load_one(&self, id: u32) -> Result<Species> {
        let pokemon = self
            .source
            .fetch_pokemon(id)
            .await
            .with_context(|| format!("Failed to fetch species {id}"))?;
        if let Some(returned) = pokemon.id {
            ensure!(returned == id, "Requested species {id} but received {returned}");
        }

        let detail = match pokemon.species_url() {
            Some(url) => match self.source.fetch_species_detail(url).await {
                Ok(detail) => Some(detail),
                Err(e) => {
                    tracing::debug!(id, error = %format_args!("{e:#}"), "Species detail unavailable");
                    None
                }
            },
            None => None,
        };

        let chain = match detail.as_ref().and_then(|d| d.evolution_chain_url()) {
            Some(url) => match self.source.fetch_evolution_chain(url).await {
                Ok(resource) => resource.chain,
                Err(e) => {
                    tracing::debug!(id, error = %format_args!("{e:#}"), "Evolution chain unavailable");
                    None
                }
            },
            None => None,
        };

        normalize(&pokemon, detail.as_ref(), chain.as_ref())
            .with_context(|| format!("Failed to normalize species {id}"))
    }
}
