//! Query engine over a catalog snapshot
//!
//! All functions are pure: they read the entries they are given and return
//! views of references, so they can run concurrently on a shared snapshot.

mod builder;
mod filter;
mod matchup;
mod sort;
mod team;

pub use builder::CatalogQuery;
pub use filter::{
    filter_by_generation, filter_by_generation_range, filter_by_id_range, filter_by_type,
    filter_by_type_tag, search,
};
pub use matchup::{Matchups, compute_matchups, compute_matchups_for_tags};
pub use sort::{SortOrder, compare_names, sort};
pub use team::{MAX_TEAM_SIZE, TOP_MATCHUPS, Team, TeamAnalysis, TeamMode, analyze_team};

#[cfg(test)]
pub(crate) mod tests {
    use super::compute_matchups;
    use crate::types::{CombatStats, Species, Type};

    /// Minimal species with matchups derived from its types
    pub(crate) fn species(id: u32, name: &str, types: &[Type]) -> Species {
        let matchups = compute_matchups(types);
        Species {
            id,
            name: name.to_string(),
            types: types.to_vec(),
            image: None,
            description: String::new(),
            combat_stats: CombatStats::default(),
            fast_moves: Vec::new(),
            charged_moves: Vec::new(),
            evolution_chain: None,
            weaknesses: matchups.weaknesses,
            strengths: matchups.strengths,
        }
    }

    pub(crate) fn ids(view: &[&Species]) -> Vec<u32> {
        view.iter().map(|s| s.id).collect()
    }
}
