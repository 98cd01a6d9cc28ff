//! Result ordering

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::types::Species;

/// Sort criterion for a result view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    #[default]
    IdAscending,
    IdDescending,
    NameAscending,
    NameDescending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::IdAscending,
        SortOrder::IdDescending,
        SortOrder::NameAscending,
        SortOrder::NameDescending,
    ];

    /// Parse a criterion key.
    ///
    /// Accepts `id-ascending`/`id-descending`/`name-ascending`/`name-descending`
    /// and the short keys `number-asc`/`number-desc`/`name-asc`/`name-desc`.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "id-ascending" | "number-asc" => Some(SortOrder::IdAscending),
            "id-descending" | "number-desc" => Some(SortOrder::IdDescending),
            "name-ascending" | "name-asc" => Some(SortOrder::NameAscending),
            "name-descending" | "name-desc" => Some(SortOrder::NameDescending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::IdAscending => "id-ascending",
            SortOrder::IdDescending => "id-descending",
            SortOrder::NameAscending => "name-ascending",
            SortOrder::NameDescending => "name-descending",
        }
    }

    fn compare(&self, a: &Species, b: &Species) -> Ordering {
        match self {
            SortOrder::IdAscending => a.id.cmp(&b.id),
            SortOrder::IdDescending => b.id.cmp(&a.id),
            SortOrder::NameAscending => compare_names(&a.name, &b.name),
            SortOrder::NameDescending => compare_names(&b.name, &a.name),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::from_key(s).ok_or_else(|| CatalogError::UnknownSortCriterion(s.to_string()))
    }
}

/// Order a view. The sort is stable: entries with equal keys keep their
/// relative input order.
pub fn sort<'a, I>(order: SortOrder, species: I) -> Vec<&'a Species>
where
    I: IntoIterator<Item = &'a Species>,
{
    let mut view: Vec<&Species> = species.into_iter().collect();
    view.sort_by(|a, b| order.compare(a, b));
    view
}

/// Locale-style name comparison.
///
/// Letters compare case- and accent-insensitively first. Ties are broken
/// lowercase-first, then unaccented-first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.chars().flat_map(fold).cmp(b.chars().flat_map(fold));
    folded.then_with(|| a.chars().map(tertiary).cmp(b.chars().map(tertiary)))
}

fn tertiary(c: char) -> (bool, char) {
    (c.is_uppercase(), c)
}

fn fold(c: char) -> impl Iterator<Item = char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        _ => c,
    };
    base.to_lowercase()
}
