//! Element types and the matchup table

use std::str::FromStr;

use crate::error::CatalogError;

/// Element types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Types this type is weak to
    pub fn weak_to(&self) -> &'static [Type] {
        MATCHUPS[*self as usize].weak_to
    }

    /// Types this type is strong against
    pub fn strong_against(&self) -> &'static [Type] {
        MATCHUPS[*self as usize].strong_against
    }

    /// Parse from an upstream tag (case-insensitive)
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Canonical lowercase tag, as used upstream
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Type {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_tag(s).ok_or_else(|| CatalogError::UnknownType(s.to_string()))
    }
}

/// One row of the matchup table
#[derive(Debug)]
pub struct MatchupEntry {
    pub weak_to: &'static [Type],
    pub strong_against: &'static [Type],
}

use Type::*;

/// Simplified matchup table, indexed by `Type as usize`.
///
/// Unlike a full effectiveness chart this only records which types a
/// defender is weak to and which types an attacker hits hard; immunities and
/// resistances are not modelled.
#[rustfmt::skip]
pub static MATCHUPS: [MatchupEntry; 18] = [
    // Normal
    MatchupEntry { weak_to: &[Fighting], strong_against: &[] },
    // Fire
    MatchupEntry { weak_to: &[Water, Ground, Rock], strong_against: &[Grass, Ice, Bug, Steel] },
    // Water
    MatchupEntry { weak_to: &[Electric, Grass], strong_against: &[Fire, Ground, Rock] },
    // Electric
    MatchupEntry { weak_to: &[Ground], strong_against: &[Water, Flying] },
    // Grass
    MatchupEntry {
        weak_to: &[Fire, Ice, Poison, Flying, Bug],
        strong_against: &[Water, Ground, Rock],
    },
    // Ice
    MatchupEntry {
        weak_to: &[Fire, Fighting, Rock, Steel],
        strong_against: &[Grass, Ground, Flying, Dragon],
    },
    // Fighting
    MatchupEntry {
        weak_to: &[Flying, Psychic, Fairy],
        strong_against: &[Normal, Ice, Rock, Dark, Steel],
    },
    // Poison
    MatchupEntry { weak_to: &[Ground, Psychic], strong_against: &[Grass, Fairy] },
    // Ground
    MatchupEntry {
        weak_to: &[Water, Grass, Ice],
        strong_against: &[Fire, Electric, Poison, Rock, Steel],
    },
    // Flying
    MatchupEntry { weak_to: &[Electric, Ice, Rock], strong_against: &[Grass, Fighting, Bug] },
    // Psychic
    MatchupEntry { weak_to: &[Bug, Ghost, Dark], strong_against: &[Fighting, Poison] },
    // Bug
    MatchupEntry { weak_to: &[Fire, Flying, Rock], strong_against: &[Grass, Psychic, Dark] },
    // Rock
    MatchupEntry {
        weak_to: &[Water, Grass, Fighting, Ground, Steel],
        strong_against: &[Fire, Ice, Flying, Bug],
    },
    // Ghost
    MatchupEntry { weak_to: &[Ghost, Dark], strong_against: &[Psychic, Ghost] },
    // Dragon
    MatchupEntry { weak_to: &[Ice, Dragon, Fairy], strong_against: &[Dragon] },
    // Dark
    MatchupEntry { weak_to: &[Fighting, Bug, Fairy], strong_against: &[Psychic, Ghost] },
    // Steel
    MatchupEntry { weak_to: &[Fire, Fighting, Ground], strong_against: &[Ice, Rock, Fairy] },
    // Fairy
    MatchupEntry { weak_to: &[Poison, Steel], strong_against: &[Fighting, Dragon, Dark] },
];
