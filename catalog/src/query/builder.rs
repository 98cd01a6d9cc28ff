//! Composed catalog query

use super::filter::{filter_by_id_range, filter_by_type, search};
use super::sort::{SortOrder, sort};
use crate::error::CatalogError;
use crate::types::{Generation, Species, Type};

/// Search, filters and sort applied together.
///
/// Stages run in a fixed order (search, type, id range, sort) so sorting
/// always sees the final working set. Parameters are validated when set,
/// which keeps [`CatalogQuery::apply`] infallible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    search: Option<String>,
    type_filter: Option<Type>,
    id_range: Option<(u32, u32)>,
    sort: SortOrder,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search; an empty string clears it
    pub fn search(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.search = (!query.is_empty()).then_some(query);
        self
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.type_filter = Some(ty);
        self
    }

    /// Type filter from a raw tag
    pub fn type_tag(self, tag: &str) -> Result<Self, CatalogError> {
        Ok(self.with_type(tag.parse()?))
    }

    /// Restrict to an inclusive id range
    pub fn id_range(mut self, min: u32, max: u32) -> Result<Self, CatalogError> {
        if min > max {
            return Err(CatalogError::InvalidRange { min, max });
        }
        self.id_range = Some((min, max));
        Ok(self)
    }

    /// Restrict to the ids introduced by a generation
    pub fn generation(mut self, generation: Generation) -> Self {
        let range = generation.range();
        self.id_range = Some((*range.start(), *range.end()));
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = order;
        self
    }

    /// Sort from a criterion key such as `name-descending`
    pub fn sort_key(self, key: &str) -> Result<Self, CatalogError> {
        Ok(self.sort(key.parse()?))
    }

    /// Whether any filter or a non-default sort is set (search excluded)
    pub fn has_active_filters(&self) -> bool {
        self.type_filter.is_some() || self.id_range.is_some() || self.sort != SortOrder::default()
    }

    /// Drop type, range and sort, keeping the search text
    pub fn clear_filters(self) -> Self {
        Self {
            search: self.search,
            ..Self::default()
        }
    }

    pub fn apply<'a, I>(&self, species: I) -> Vec<&'a Species>
    where
        I: IntoIterator<Item = &'a Species>,
    {
        let mut view = match &self.search {
            Some(query) => search(query, species),
            None => species.into_iter().collect(),
        };

        if let Some(ty) = self.type_filter {
            view = filter_by_type(ty, view);
        }

        if let Some((min, max)) = self.id_range {
            view = filter_by_id_range(min..=max, view);
        }

        sort(self.sort, view)
    }
}
