//! Wire types for the PokeAPI species endpoints.
//!
//! Every field is optional at this layer: upstream payloads are decoded
//! leniently and the catalog crate decides which absences are fatal.

use thiserror::Error;

pub mod evolution;
pub mod pokemon;
pub mod resource;
pub mod species;

mod tests;

pub use evolution::{RawChainLink, RawEvolutionChain};
pub use pokemon::{
    RawArtwork, RawOtherSprites, RawPokemon, RawSprites, RawStat, RawTypeSlot, SpeciesCount,
};
pub use resource::{NamedResource, resource_id};
pub use species::{RawFlavorText, RawResourceLink, RawSpeciesDetail};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid resource url: {0}")]
    InvalidResourceUrl(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid payload format: {0}")]
    InvalidFormat(String),
}

/// Decode any upstream payload, mapping serde failures to [`ParseError`]
pub fn parse_payload<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ParseError> {
    serde_json::from_str(body).map_err(|e| ParseError::InvalidFormat(e.to_string()))
}
