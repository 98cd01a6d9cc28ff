//! Team composition analysis

use crate::error::CatalogError;
use crate::types::{Species, Type};

/// Largest team the analysis accepts (raid size)
pub const MAX_TEAM_SIZE: usize = 6;

/// Number of entries kept in each ranking
pub const TOP_MATCHUPS: usize = 5;

/// Most common strengths and weaknesses across a team
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamAnalysis {
    pub top_strengths: Vec<Type>,
    pub top_weaknesses: Vec<Type>,
}

impl TeamAnalysis {
    pub fn is_empty(&self) -> bool {
        self.top_strengths.is_empty() && self.top_weaknesses.is_empty()
    }
}

/// Rank the types a team covers and the types it is exposed to.
///
/// Strengths and weaknesses are tallied independently over every member,
/// ranked by descending count with ties kept in first-seen order, and cut to
/// the top five. An empty team gives an empty analysis.
pub fn analyze_team(team: &[&Species]) -> Result<TeamAnalysis, CatalogError> {
    if team.len() > MAX_TEAM_SIZE {
        return Err(CatalogError::TeamTooLarge {
            size: team.len(),
            max: MAX_TEAM_SIZE,
        });
    }

    Ok(tally(team.iter().copied()))
}

fn tally<'a>(members: impl Iterator<Item = &'a Species> + Clone) -> TeamAnalysis {
    TeamAnalysis {
        top_strengths: rank(members.clone().flat_map(|s| &s.strengths)),
        top_weaknesses: rank(members.flat_map(|s| &s.weaknesses)),
    }
}

fn rank<'a>(occurrences: impl Iterator<Item = &'a Type>) -> Vec<Type> {
    let mut tally: Vec<(Type, usize)> = Vec::new();
    for ty in occurrences {
        match tally.iter_mut().find(|(t, _)| t == ty) {
            Some((_, count)) => *count += 1,
            None => tally.push((*ty, 1)),
        }
    }

    // Stable sort keeps first-seen order among equal counts
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
        .into_iter()
        .take(TOP_MATCHUPS)
        .map(|(ty, _)| ty)
        .collect()
}

/// Battle format a team is built for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamMode {
    #[default]
    Pvp,
    Raid,
}

impl TeamMode {
    pub fn max_size(&self) -> usize {
        match self {
            TeamMode::Pvp => 3,
            TeamMode::Raid => MAX_TEAM_SIZE,
        }
    }
}

/// A team under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    mode: TeamMode,
    members: Vec<Species>,
}

impl Team {
    pub fn new(mode: TeamMode) -> Self {
        Self {
            mode,
            members: Vec::new(),
        }
    }

    pub fn mode(&self) -> TeamMode {
        self.mode
    }

    pub fn members(&self) -> &[Species] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.mode.max_size()
    }

    /// Open slots left for the current mode
    pub fn remaining(&self) -> usize {
        self.mode.max_size().saturating_sub(self.members.len())
    }

    /// Add a member; the same species may appear more than once
    pub fn add(&mut self, species: Species) -> Result<(), CatalogError> {
        if self.is_full() {
            return Err(CatalogError::TeamFull {
                max: self.mode.max_size(),
            });
        }
        self.members.push(species);
        Ok(())
    }

    /// Remove and return the member at `index`
    pub fn remove(&mut self, index: usize) -> Result<Species, CatalogError> {
        if index >= self.members.len() {
            return Err(CatalogError::InvalidTeamIndex(index));
        }
        Ok(self.members.remove(index))
    }

    /// Switch format; the team starts over
    pub fn switch_mode(&mut self, mode: TeamMode) {
        self.mode = mode;
        self.members.clear();
    }

    /// Same ranking as [`analyze_team`]; `add` already caps the size
    pub fn analyze(&self) -> TeamAnalysis {
        tally(self.members.iter())
    }
}
