//! Raw upstream records to [`Species`]

use pokego_protocol::{RawChainLink, RawPokemon, RawSpeciesDetail};

use super::description::select_description;
use super::evolution::flatten_raw_chain;
use crate::error::CatalogError;
use crate::query::compute_matchups;
use crate::types::{BaseStats, Species, Type, moves_for};

/// Build a [`Species`] from its upstream records.
///
/// Only `id` and `name` are required. A missing species detail yields the
/// fallback description, and a missing or malformed evolution chain yields
/// a species without relatives.
pub fn normalize(
    pokemon: &RawPokemon,
    detail: Option<&RawSpeciesDetail>,
    chain: Option<&RawChainLink>,
) -> Result<Species, CatalogError> {
    let id = pokemon
        .id
        .filter(|id| *id > 0)
        .ok_or(CatalogError::MalformedRecord { field: "id" })?;
    let name = pokemon
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(CatalogError::MalformedRecord { field: "name" })?;

    let tags = pokemon.type_tags();
    // Moves follow the first upstream slot even when that tag is unknown
    let primary = tags.first().and_then(|tag| Type::from_tag(tag));
    let types = parse_types(id, &tags);
    let matchups = compute_matchups(&types);
    let combat_stats = BaseStats::from_raw(&pokemon.stats).derive();
    let moves = moves_for(primary);

    let description = match detail {
        Some(detail) => select_description(&detail.flavor_text_entries),
        None => select_description(&[]),
    };

    Ok(Species {
        id,
        name: name.to_lowercase(),
        image: pokemon.image().map(str::to_string),
        description,
        combat_stats,
        fast_moves: moves.fast.iter().map(|m| m.to_string()).collect(),
        charged_moves: moves.charged.iter().map(|m| m.to_string()).collect(),
        evolution_chain: chain.and_then(|link| evolution_family(id, link)),
        weaknesses: matchups.weaknesses,
        strengths: matchups.strengths,
        types,
    })
}

fn parse_types(id: u32, tags: &[&str]) -> Vec<Type> {
    let mut types = Vec::with_capacity(tags.len());
    for tag in tags {
        match Type::from_tag(tag) {
            Some(ty) if !types.contains(&ty) => types.push(ty),
            Some(_) => {}
            None => tracing::warn!(id, tag = %tag, "Dropping unknown type tag"),
        }
    }
    types
}

/// Family ids for a species, or `None` when it has no relatives
fn evolution_family(id: u32, link: &RawChainLink) -> Option<Vec<u32>> {
    let ids = flatten_raw_chain(link);
    if ids.len() < 2 {
        return None;
    }
    if !ids.contains(&id) {
        tracing::warn!(id, chain = ?ids, "Evolution chain does not include species");
        return None;
    }
    Some(ids)
}
