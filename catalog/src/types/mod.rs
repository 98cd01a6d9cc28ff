//! Domain types for the species catalog

mod generation;
mod moves;
mod pokemon_type;
mod species;
mod stats;

pub use generation::Generation;
pub use moves::{MoveSet, moves_for};
pub use pokemon_type::{MATCHUPS, MatchupEntry, Type};
pub use species::Species;
pub use stats::{BaseStats, CombatStats, derive_combat_stats};
