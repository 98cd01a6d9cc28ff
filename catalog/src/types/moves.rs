//! Fixed per-type move sets

use super::pokemon_type::Type;

/// Fast and charged moves offered for a primary type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSet {
    pub fast: &'static [&'static str],
    pub charged: &'static [&'static str],
}

/// Move set for a primary type; species without a primary type get the
/// normal set
pub fn moves_for(primary: Option<Type>) -> MoveSet {
    MOVE_SETS[primary.unwrap_or(Type::Normal) as usize]
}

/// Indexed by `Type as usize`
#[rustfmt::skip]
static MOVE_SETS: [MoveSet; 18] = [
    // Normal
    MoveSet { fast: &["Tackle", "Scratch"], charged: &["Body Slam", "Hyper Beam"] },
    // Fire
    MoveSet { fast: &["Ember", "Fire Spin"], charged: &["Flamethrower", "Fire Blast", "Overheat"] },
    // Water
    MoveSet { fast: &["Water Gun", "Bubble"], charged: &["Aqua Tail", "Hydro Pump", "Surf"] },
    // Electric
    MoveSet { fast: &["Thunder Shock", "Spark"], charged: &["Thunderbolt", "Thunder", "Discharge"] },
    // Grass
    MoveSet { fast: &["Vine Whip", "Razor Leaf"], charged: &["Solar Beam", "Seed Bomb", "Power Whip"] },
    // Ice
    MoveSet { fast: &["Frost Breath", "Ice Shard"], charged: &["Ice Beam", "Blizzard", "Avalanche"] },
    // Fighting
    MoveSet { fast: &["Low Kick", "Counter"], charged: &["Close Combat", "Dynamic Punch", "Brick Break"] },
    // Poison
    MoveSet { fast: &["Poison Sting", "Acid"], charged: &["Sludge Bomb", "Gunk Shot", "Poison Fang"] },
    // Ground
    MoveSet { fast: &["Mud Shot", "Mud Slap"], charged: &["Earthquake", "Dig", "Earth Power"] },
    // Flying
    MoveSet { fast: &["Wing Attack", "Air Slash"], charged: &["Hurricane", "Aerial Ace", "Sky Attack"] },
    // Psychic
    MoveSet { fast: &["Confusion", "Psycho Cut"], charged: &["Psychic", "Psyshock", "Future Sight"] },
    // Bug
    MoveSet { fast: &["Bug Bite", "Struggle Bug"], charged: &["Bug Buzz", "X-Scissor", "Signal Beam"] },
    // Rock
    MoveSet { fast: &["Rock Throw", "Smack Down"], charged: &["Rock Slide", "Stone Edge", "Rock Blast"] },
    // Ghost
    MoveSet { fast: &["Lick", "Shadow Claw"], charged: &["Shadow Ball", "Shadow Punch", "Ominous Wind"] },
    // Dragon
    MoveSet { fast: &["Dragon Breath", "Dragon Tail"], charged: &["Dragon Claw", "Outrage", "Draco Meteor"] },
    // Dark
    MoveSet { fast: &["Bite", "Snarl"], charged: &["Dark Pulse", "Foul Play", "Crunch"] },
    // Steel
    MoveSet { fast: &["Metal Claw", "Bullet Punch"], charged: &["Flash Cannon", "Iron Head", "Heavy Slam"] },
    // Fairy
    MoveSet { fast: &["Charm", "Fairy Wind"], charged: &["Dazzling Gleam", "Moonblast", "Play Rough"] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_for_primary_type() {
        let fire = moves_for(Some(Type::Fire));
        assert_eq!(fire.fast, &["Ember", "Fire Spin"]);
        assert_eq!(fire.charged, &["Flamethrower", "Fire Blast", "Overheat"]);

        let fairy = moves_for(Some(Type::Fairy));
        assert_eq!(fairy.fast, &["Charm", "Fairy Wind"]);
    }

    #[test]
    fn test_moves_fall_back_to_normal() {
        assert_eq!(moves_for(None), moves_for(Some(Type::Normal)));
        assert_eq!(moves_for(None).charged, &["Body Slam", "Hyper Beam"]);
    }

    #[test]
    fn test_every_type_has_moves() {
        for ty in Type::all() {
            let set = moves_for(Some(*ty));
            assert!(!set.fast.is_empty(), "{ty} has no fast moves");
            assert!(!set.charged.is_empty(), "{ty} has no charged moves");
        }
    }
}
