//! Normalized species entity

use super::pokemon_type::Type;
use super::stats::CombatStats;

/// One normalized catalog entry.
///
/// Built once by [`crate::normalize::normalize`] and never modified
/// afterwards; queries hand out references.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species {
    /// Upstream national dex number
    pub id: u32,

    /// Lowercase species name
    pub name: String,

    /// One or two types, primary first
    pub types: Vec<Type>,

    /// Display asset; the presentation layer supplies a placeholder when absent
    pub image: Option<String>,

    /// Localized flavor text, resolved at normalization time
    pub description: String,

    pub combat_stats: CombatStats,

    pub fast_moves: Vec<String>,
    pub charged_moves: Vec<String>,

    /// Whole evolutionary family in ascending id order, including this
    /// species. `None` when there are no relatives, never a single id.
    pub evolution_chain: Option<Vec<u32>>,

    /// Union of the weaknesses of every type
    pub weaknesses: Vec<Type>,

    /// Union of the strengths of every type
    pub strengths: Vec<Type>,
}

impl Species {
    /// First type, which drives move selection
    pub fn primary_type(&self) -> Option<Type> {
        self.types.first().copied()
    }

    pub fn has_type(&self, ty: Type) -> bool {
        self.types.contains(&ty)
    }

    /// Whether this species belongs to an evolutionary family
    pub fn evolves(&self) -> bool {
        self.evolution_chain.is_some()
    }
}
