//! Search and filters
//!
//! Every function takes any iterator of species references (a `&[Species]`
//! or a previous result view) and returns a new view without touching the
//! entries.

use std::ops::RangeInclusive;

use crate::error::CatalogError;
use crate::types::{Generation, Species, Type};

/// Case-insensitive substring search over name, dex number and type tags.
///
/// An empty query matches everything.
pub fn search<'a, I>(query: &str, species: I) -> Vec<&'a Species>
where
    I: IntoIterator<Item = &'a Species>,
{
    if query.is_empty() {
        return species.into_iter().collect();
    }

    let needle = query.to_lowercase();
    species
        .into_iter()
        .filter(|s| matches_query(s, &needle))
        .collect()
}

fn matches_query(species: &Species, needle: &str) -> bool {
    species.name.to_lowercase().contains(needle)
        || species.id.to_string().contains(needle)
        || species.types.iter().any(|t| t.as_str().contains(needle))
}

/// Keep species that have the given type in either slot
pub fn filter_by_type<'a, I>(ty: Type, species: I) -> Vec<&'a Species>
where
    I: IntoIterator<Item = &'a Species>,
{
    species.into_iter().filter(|s| s.has_type(ty)).collect()
}

/// Same as [`filter_by_type`] for a raw tag (case-insensitive)
pub fn filter_by_type_tag<'a, I>(tag: &str, species: I) -> Result<Vec<&'a Species>, CatalogError>
where
    I: IntoIterator<Item = &'a Species>,
{
    let ty: Type = tag.parse()?;
    Ok(filter_by_type(ty, species))
}

/// Keep species whose dex number lies in `min..=max`
pub fn filter_by_generation_range<'a, I>(
    min: u32,
    max: u32,
    species: I,
) -> Result<Vec<&'a Species>, CatalogError>
where
    I: IntoIterator<Item = &'a Species>,
{
    if min > max {
        return Err(CatalogError::InvalidRange { min, max });
    }
    Ok(filter_by_id_range(min..=max, species))
}

/// Keep species introduced in a generation
pub fn filter_by_generation<'a, I>(generation: Generation, species: I) -> Vec<&'a Species>
where
    I: IntoIterator<Item = &'a Species>,
{
    filter_by_id_range(generation.range(), species)
}

/// Keep species whose dex number lies in `range`; an empty range keeps none
pub fn filter_by_id_range<'a, I>(range: RangeInclusive<u32>, species: I) -> Vec<&'a Species>
where
    I: IntoIterator<Item = &'a Species>,
{
    species
        .into_iter()
        .filter(|s| range.contains(&s.id))
        .collect()
}
