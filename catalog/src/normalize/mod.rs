//! Conversion from upstream records into catalog entries

mod description;
mod evolution;
mod species;

pub use description::{FALLBACK_DESCRIPTION, select_description};
pub use evolution::{
    EvolutionNode, MAX_EVOLUTION_DEPTH, flatten_evolution_chain, flatten_raw_chain,
};
pub use species::normalize;
