//! Session catalog snapshot

use std::collections::HashMap;

use crate::query::{CatalogQuery, search};
use crate::types::Species;

/// Immutable collection of normalized species for one session.
///
/// A snapshot is never patched: to refresh, load a new one and drop the old.
/// Entries keep their load order; use [`CatalogQuery`] for a sorted view.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: Vec<Species>,
    by_id: HashMap<u32, usize>,
}

impl Catalog {
    /// Build a snapshot. Later entries with an id already present are dropped.
    pub fn new(entries: impl IntoIterator<Item = Species>) -> Self {
        let mut species = Vec::new();
        let mut by_id = HashMap::new();

        for entry in entries {
            if by_id.contains_key(&entry.id) {
                tracing::warn!(id = entry.id, name = %entry.name, "Dropping duplicate species");
                continue;
            }
            by_id.insert(entry.id, species.len());
            species.push(entry);
        }

        Self { species, by_id }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Look up a species by dex number
    pub fn get(&self, id: u32) -> Option<&Species> {
        self.by_id.get(&id).map(|&index| &self.species[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Species> {
        self.species.iter()
    }

    pub fn as_slice(&self) -> &[Species] {
        &self.species
    }

    pub fn search(&self, query: &str) -> Vec<&Species> {
        search(query, &self.species)
    }

    pub fn query(&self, query: &CatalogQuery) -> Vec<&Species> {
        query.apply(&self.species)
    }

    /// Members of a species' evolutionary family present in this snapshot,
    /// in chain order. Empty when the species has no relatives.
    pub fn family(&self, id: u32) -> Vec<&Species> {
        self.get(id)
            .and_then(|s| s.evolution_chain.as_deref())
            .unwrap_or_default()
            .iter()
            .filter_map(|member| self.get(*member))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Species;
    type IntoIter = std::slice::Iter<'a, Species>;

    fn into_iter(self) -> Self::IntoIter {
        self.species.iter()
    }
}

impl FromIterator<Species> for Catalog {
    fn from_iter<T: IntoIterator<Item = Species>>(iter: T) -> Self {
        Catalog::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tests::{ids, species};
    use crate::query::{SortOrder, filter_by_type};
    use crate::types::Type;

    fn catalog() -> Catalog {
        let mut bulbasaur = species(1, "bulbasaur", &[Type::Grass, Type::Poison]);
        bulbasaur.evolution_chain = Some(vec![1, 2, 3]);
        let mut venusaur = species(3, "venusaur", &[Type::Grass, Type::Poison]);
        venusaur.evolution_chain = Some(vec![1, 2, 3]);

        Catalog::new(vec![
            venusaur,
            species(4, "charmander", &[Type::Fire]),
            bulbasaur,
        ])
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(4).map(|s| s.name.as_str()), Some("charmander"));
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_keeps_load_order() {
        let catalog = catalog();
        let order: Vec<u32> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(order, vec![3, 4, 1]);
    }

    #[test]
    fn test_duplicates_dropped() {
        let catalog = Catalog::new(vec![
            species(7, "squirtle", &[Type::Water]),
            species(7, "impostor", &[Type::Normal]),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7).unwrap().name, "squirtle");
    }

    #[test]
    fn test_query() {
        let catalog = catalog();
        let query = CatalogQuery::new().sort(SortOrder::IdAscending);
        assert_eq!(ids(&catalog.query(&query)), vec![1, 3, 4]);
        assert_eq!(ids(&catalog.search("saur")), vec![3, 1]);
        assert_eq!(ids(&filter_by_type(Type::Fire, &catalog)), vec![4]);
    }

    #[test]
    fn test_family_skips_missing_members() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.family(3)), vec![1, 3]);
        assert!(catalog.family(4).is_empty());
        assert!(catalog.family(999).is_empty());
    }

    #[test]
    fn test_empty() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.query(&CatalogQuery::new()).is_empty());
    }

    #[test]
    fn test_collect() {
        let catalog: Catalog = (1..=3)
            .map(|id| species(id, "member", &[Type::Bug]))
            .collect();
        assert_eq!(catalog.len(), 3);
    }
}
