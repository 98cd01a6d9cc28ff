//! Species normalization and catalog queries for PokeAPI data.
//!
//! This crate turns the raw, nested upstream records decoded by
//! `pokego-protocol` into flat [`Species`] entries with derived combat stats
//! and type matchups, and answers search, filter, sort and team questions
//! over a [`Catalog`] snapshot.
//!
//! # Overview
//!
//! ```text
//! pokego-protocol (wire format)
//!        │
//!        ▼
//! pokego-catalog (normalization + queries) ← THIS CRATE
//!        │
//!        └─> pokego-client (fetching and loading)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - element types with the matchup table
//! - [`CombatStats`] - attack/defense/stamina derived from base stats
//! - [`Species`] - one normalized catalog entry
//! - [`Catalog`] - immutable session snapshot
//! - [`CatalogQuery`] - search, filters and sort in one value
//! - [`Team`] / [`TeamAnalysis`] - team building and coverage ranking
//!
//! # Example Usage
//!
//! ```ignore
//! use pokego_catalog::{Catalog, CatalogQuery, Generation, SortOrder, Type};
//!
//! let catalog = Catalog::new(entries);
//!
//! let view = catalog.query(
//!     &CatalogQuery::new()
//!         .search("char")
//!         .with_type(Type::Fire)
//!         .generation(Generation::Kanto)
//!         .sort(SortOrder::NameAscending),
//! );
//! for species in view {
//!     println!("#{:03} {}", species.id, species.name);
//! }
//! ```

pub mod error;
pub mod normalize;
pub mod query;
pub mod snapshot;
pub mod types;

pub use error::CatalogError;
pub use normalize::{flatten_evolution_chain, normalize, select_description};
pub use query::{
    CatalogQuery, Matchups, SortOrder, Team, TeamAnalysis, TeamMode, analyze_team,
    compute_matchups,
};
pub use snapshot::Catalog;
pub use types::{BaseStats, CombatStats, Generation, Species, Type, derive_combat_stats};

// Re-export the wire types the normalizer consumes
pub use pokego_protocol::{RawChainLink, RawPokemon, RawSpeciesDetail};
