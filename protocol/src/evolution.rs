//! `/evolution-chain/{id}` payload

use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEvolutionChain {
    pub chain: Option<RawChainLink>,
}

/// One node of the recursive evolution tree; the root is the earliest
/// pre-evolution of the family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawChainLink {
    pub species: Option<NamedResource>,
    pub evolves_to: Vec<RawChainLink>,
}
