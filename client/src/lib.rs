//! Loads the species catalog from PokeAPI.
//!
//! ```ignore
//! use pokego_client::{Loader, LoaderConfig};
//!
//! let outcome = Loader::pokeapi(LoaderConfig::default()).load_all().await;
//! println!("loaded {}/{}", outcome.report.loaded, outcome.report.requested);
//! ```

mod config;
mod loader;
mod source;

pub use config::LoaderConfig;
pub use loader::{LoadOutcome, LoadProgress, LoadReport, Loader};
pub use source::{PokeApi, SpeciesSource};

pub use pokego_catalog::{
    Catalog, CatalogError, CatalogQuery, Generation, SortOrder, Species, Team, TeamAnalysis,
    TeamMode, Type,
};

/// Public PokeAPI root
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";
