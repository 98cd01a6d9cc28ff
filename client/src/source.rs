use anyhow::{Context, Result};
use async_trait::async_trait;
use pokego_protocol::{
    RawEvolutionChain, RawPokemon, RawSpeciesDetail, SpeciesCount, parse_payload,
};
use serde::de::DeserializeOwned;

use crate::POKEAPI_URL;

/// Upstream provider of species records.
///
/// Implemented over HTTP by [`PokeApi`]; tests and offline callers can
/// provide their own. Sources are shared by every concurrent fetch of a load.
#[async_trait]
pub trait SpeciesSource: Send + Sync {
    /// Total number of species the provider knows about
    async fn species_count(&self) -> Result<u32>;

    /// Species record by dex number
    async fn fetch_pokemon(&self, id: u32) -> Result<RawPokemon>;

    /// Species detail record (flavor text, evolution chain link)
    async fn fetch_species_detail(&self, url: &str) -> Result<RawSpeciesDetail>;

    /// Evolution chain resource
    async fn fetch_evolution_chain(&self, url: &str) -> Result<RawEvolutionChain>;
}

/// PokeAPI over HTTP
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, user agent)
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?
            .error_for_status()
            .with_context(|| format!("Request to {url} was rejected"))?;

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {url}"))?;

        parse_payload(&body).with_context(|| format!("Failed to parse response from {url}"))
    }
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new(POKEAPI_URL)
    }
}

#[async_trait]
impl SpeciesSource for PokeApi {
    async fn species_count(&self) -> Result<u32> {
        let url = format!("{}/pokemon?limit=1", self.base_url);
        let list: SpeciesCount = self.get_json(&url).await?;
        list.count.context("Species list response missing count")
    }

    async fn fetch_pokemon(&self, id: u32) -> Result<RawPokemon> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        self.get_json(&url).await
    }

    async fn fetch_species_detail(&self, url: &str) -> Result<RawSpeciesDetail> {
        self.get_json(url).await
    }

    async fn fetch_evolution_chain(&self, url: &str) -> Result<RawEvolutionChain> {
        self.get_json(url).await
    }
}
