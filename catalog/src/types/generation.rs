//! Game generations and their dex number ranges

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Generation {
    Kanto = 1,
    Johto = 2,
    Hoenn = 3,
    Sinnoh = 4,
    Unova = 5,
    Kalos = 6,
    Alola = 7,
    Galar = 8,
    Paldea = 9,
}

impl Generation {
    pub const ALL: [Generation; 9] = [
        Generation::Kanto,
        Generation::Johto,
        Generation::Hoenn,
        Generation::Sinnoh,
        Generation::Unova,
        Generation::Kalos,
        Generation::Alola,
        Generation::Galar,
        Generation::Paldea,
    ];

    /// Generation by number (1-9)
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Inclusive dex number range introduced by this generation
    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            Generation::Kanto => 1..=151,
            Generation::Johto => 152..=251,
            Generation::Hoenn => 252..=386,
            Generation::Sinnoh => 387..=493,
            Generation::Unova => 494..=649,
            Generation::Kalos => 650..=721,
            Generation::Alola => 722..=809,
            Generation::Galar => 810..=905,
            Generation::Paldea => 906..=1010,
        }
    }

    /// Generation that introduced a dex number
    pub fn of(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.range().contains(&id))
    }

    /// Region name
    pub fn region(&self) -> &'static str {
        match self {
            Generation::Kanto => "Kanto",
            Generation::Johto => "Johto",
            Generation::Hoenn => "Hoenn",
            Generation::Sinnoh => "Sinnoh",
            Generation::Unova => "Unova",
            Generation::Kalos => "Kalos",
            Generation::Alola => "Alola",
            Generation::Galar => "Galar",
            Generation::Paldea => "Paldea",
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generation {} ({})", self.number(), self.region())
    }
}

impl FromStr for Generation {
    type Err = CatalogError;

    /// Parse `"1"`..`"9"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Generation::from_number)
            .ok_or_else(|| CatalogError::UnknownGeneration(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_contiguous() {
        let mut next = 1;
        for generation in Generation::ALL {
            let range = generation.range();
            assert_eq!(*range.start(), next, "{generation} starts late");
            next = range.end() + 1;
        }
        assert_eq!(next, 1011);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Generation::from_number(1), Some(Generation::Kanto));
        assert_eq!(Generation::from_number(9), Some(Generation::Paldea));
        assert_eq!(Generation::from_number(0), None);
        assert_eq!(Generation::from_number(10), None);
    }

    #[test]
    fn test_of() {
        assert_eq!(Generation::of(25), Some(Generation::Kanto));
        assert_eq!(Generation::of(152), Some(Generation::Johto));
        assert_eq!(Generation::of(1010), Some(Generation::Paldea));
        assert_eq!(Generation::of(1011), None);
        assert_eq!(Generation::of(0), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4".parse::<Generation>(), Ok(Generation::Sinnoh));
        assert_eq!(
            "10".parse::<Generation>(),
            Err(CatalogError::UnknownGeneration("10".to_string()))
        );
        assert!("kanto".parse::<Generation>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Generation::Kanto.to_string(), "Generation 1 (Kanto)");
    }
}
