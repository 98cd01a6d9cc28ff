//! `/pokemon-species/{id}` payload

use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSpeciesDetail {
    pub flavor_text_entries: Vec<RawFlavorText>,
    pub evolution_chain: Option<RawResourceLink>,
}

impl RawSpeciesDetail {
    pub fn evolution_chain_url(&self) -> Option<&str> {
        self.evolution_chain.as_ref()?.url.as_deref()
    }
}

/// One localized flavor text entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFlavorText {
    pub flavor_text: Option<String>,
    pub language: Option<NamedResource>,
}

impl RawFlavorText {
    pub fn language(&self) -> Option<&str> {
        self.language.as_ref()?.name.as_deref()
    }
}

/// Unnamed `{ url }` link (used for the evolution chain)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawResourceLink {
    pub url: Option<String>,
}
