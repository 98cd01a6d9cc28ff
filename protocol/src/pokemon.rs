//! `/pokemon/{id}` and `/pokemon?limit=N` payloads

use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

/// Species record as returned by `/pokemon/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPokemon {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub types: Vec<RawTypeSlot>,
    pub stats: Vec<RawStat>,
    pub sprites: RawSprites,
    /// Link to the species detail record (flavor text, evolution chain)
    pub species: Option<NamedResource>,
}

impl RawPokemon {
    /// Type tags ordered by slot (primary type first)
    pub fn type_tags(&self) -> Vec<&str> {
        let mut slots: Vec<&RawTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot.unwrap_or(u32::MAX));
        slots
            .into_iter()
            .filter_map(|s| s.kind.as_ref()?.name.as_deref())
            .collect()
    }

    /// Display asset, preferring the official artwork
    pub fn image(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }

    /// Url of the species detail record
    pub fn species_url(&self) -> Option<&str> {
        self.species.as_ref()?.url.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTypeSlot {
    pub slot: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStat {
    pub base_stat: Option<u32>,
    pub stat: Option<NamedResource>,
}

impl RawStat {
    pub fn name(&self) -> Option<&str> {
        self.stat.as_ref()?.name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSprites {
    pub front_default: Option<String>,
    pub other: RawOtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: RawArtwork,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawArtwork {
    pub front_default: Option<String>,
}

/// Paginated list header from `/pokemon?limit=N`; only the total is used
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesCount {
    pub count: Option<u32>,
}
