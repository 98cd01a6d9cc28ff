//! Type matchup unions

use crate::types::Type;

/// Combined weaknesses and strengths of a set of types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchups {
    pub weaknesses: Vec<Type>,
    pub strengths: Vec<Type>,
}

/// Union of the weak-to and strong-against sets of every type.
///
/// Duplicates are collapsed; entries keep the order in which they are first
/// seen, so the result is stable for a given input.
pub fn compute_matchups(types: &[Type]) -> Matchups {
    let mut matchups = Matchups::default();

    for ty in types {
        push_unique(&mut matchups.weaknesses, ty.weak_to());
        push_unique(&mut matchups.strengths, ty.strong_against());
    }

    matchups
}

/// Same as [`compute_matchups`] for raw tags; unknown tags are ignored
pub fn compute_matchups_for_tags(tags: &[&str]) -> Matchups {
    let types: Vec<Type> = tags.iter().filter_map(|tag| Type::from_tag(tag)).collect();
    compute_matchups(&types)
}

fn push_unique(into: &mut Vec<Type>, from: &[Type]) {
    for ty in from {
        if !into.contains(ty) {
            into.push(*ty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_single_type() {
        let matchups = compute_matchups(&[Type::Steel]);
        assert_eq!(
            matchups.weaknesses,
            vec![Type::Fire, Type::Fighting, Type::Ground]
        );
        assert_eq!(matchups.strengths, vec![Type::Ice, Type::Rock, Type::Fairy]);
    }

    #[test]
    fn test_dual_type_union() {
        // Water/Ground: both are weak to grass, which is listed once
        let matchups = compute_matchups(&[Type::Water, Type::Ground]);
        assert_eq!(
            matchups.weaknesses,
            vec![Type::Electric, Type::Grass, Type::Water, Type::Ice]
        );
        assert_eq!(
            matchups.strengths,
            vec![
                Type::Fire,
                Type::Ground,
                Type::Rock,
                Type::Electric,
                Type::Poison,
                Type::Steel
            ]
        );
    }

    #[test]
    fn test_duplicates_collapsed() {
        // Rock and Ground are both weak to water and grass
        let matchups = compute_matchups(&[Type::Rock, Type::Ground]);
        let unique: HashSet<_> = matchups.weaknesses.iter().collect();
        assert_eq!(unique.len(), matchups.weaknesses.len());
        assert_eq!(
            matchups.weaknesses,
            vec![Type::Water, Type::Grass, Type::Fighting, Type::Ground, Type::Steel, Type::Ice]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(compute_matchups(&[]), Matchups::default());
    }

    #[test]
    fn test_tags_ignore_unknown() {
        let matchups = compute_matchups_for_tags(&["FIRE", "stellar", ""]);
        assert_eq!(matchups, compute_matchups(&[Type::Fire]));
        assert_eq!(compute_matchups_for_tags(&["shadow"]), Matchups::default());
    }

    fn any_types() -> impl Strategy<Value = Vec<Type>> {
        prop::collection::vec(prop::sample::select(Type::ALL.to_vec()), 0..4)
    }

    proptest! {
        #[test]
        fn prop_matchups_unique_and_in_vocabulary(types in any_types()) {
            let matchups = compute_matchups(&types);
            for list in [&matchups.weaknesses, &matchups.strengths] {
                let unique: HashSet<_> = list.iter().collect();
                prop_assert_eq!(unique.len(), list.len());
                prop_assert!(list.iter().all(|t| Type::all().contains(t)));
            }
        }

        #[test]
        fn prop_matchups_order_independent_as_sets(types in any_types()) {
            let mut reversed = types.clone();
            reversed.reverse();

            let a = compute_matchups(&types);
            let b = compute_matchups(&reversed);
            let set = |v: &Vec<Type>| v.iter().copied().collect::<HashSet<_>>();
            prop_assert_eq!(set(&a.weaknesses), set(&b.weaknesses));
            prop_assert_eq!(set(&a.strengths), set(&b.strengths));
        }
    }
}
