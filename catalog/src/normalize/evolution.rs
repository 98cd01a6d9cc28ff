//! Evolution tree flattening

use std::collections::BTreeSet;

use pokego_protocol::{ParseError, RawChainLink};

/// Deepest level visited while flattening; real families are at most three
/// stages deep
pub const MAX_EVOLUTION_DEPTH: usize = 16;

/// Evolution tree node with the species id already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    pub species_id: u32,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(species_id: u32, children: Vec<EvolutionNode>) -> Self {
        Self {
            species_id,
            children,
        }
    }

    pub fn leaf(species_id: u32) -> Self {
        Self::new(species_id, Vec::new())
    }

    /// Resolve every node's species id from its resource url.
    ///
    /// Fails if any node lacks a species link or carries a url without a
    /// numeric id.
    pub fn from_raw(link: &RawChainLink) -> Result<Self, ParseError> {
        let species = link
            .species
            .as_ref()
            .ok_or_else(|| ParseError::MissingField("species".to_string()))?;

        let children = link
            .evolves_to
            .iter()
            .map(EvolutionNode::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(species.id()?, children))
    }
}

/// Collect every species id of the tree, de-duplicated and ascending.
///
/// A root without children yields a single id; callers decide what a
/// one-element family means.
pub fn flatten_evolution_chain(root: &EvolutionNode) -> Vec<u32> {
    let mut ids = BTreeSet::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if depth >= MAX_EVOLUTION_DEPTH {
            tracing::warn!(
                species_id = node.species_id,
                depth,
                "Evolution tree exceeds maximum depth, skipping node"
            );
            continue;
        }

        ids.insert(node.species_id);
        // Reverse so the leftmost child is visited first (pre-order)
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    ids.into_iter().collect()
}

/// Flatten an upstream chain, degrading to an empty list when it is malformed
pub fn flatten_raw_chain(link: &RawChainLink) -> Vec<u32> {
    match EvolutionNode::from_raw(link) {
        Ok(root) => flatten_evolution_chain(&root),
        Err(e) => {
            tracing::warn!(error = %e, "Malformed evolution chain, treating as chain-less");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokego_protocol::NamedResource;

    fn link(id: u32, evolves_to: Vec<RawChainLink>) -> RawChainLink {
        RawChainLink {
            species: Some(NamedResource {
                name: Some(format!("species-{id}")),
                url: Some(format!("https://pokeapi.co/api/v2/pokemon-species/{id}/")),
            }),
            evolves_to,
        }
    }

    #[test]
    fn test_flatten_linear_chain() {
        let root = EvolutionNode::new(
            1,
            vec![EvolutionNode::new(2, vec![EvolutionNode::leaf(3)])],
        );
        assert_eq!(flatten_evolution_chain(&root), vec![1, 2, 3]);
    }

    #[test]
    fn test_flatten_single_node() {
        assert_eq!(flatten_evolution_chain(&EvolutionNode::leaf(1)), vec![1]);
    }

    #[test]
    fn test_flatten_branching_chain_sorted() {
        // Eevee and a few of its branches, deliberately out of order
        let root = EvolutionNode::new(
            133,
            vec![
                EvolutionNode::leaf(700),
                EvolutionNode::leaf(134),
                EvolutionNode::leaf(196),
                EvolutionNode::leaf(135),
            ],
        );
        assert_eq!(flatten_evolution_chain(&root), vec![133, 134, 135, 196, 700]);
    }

    #[test]
    fn test_flatten_deduplicates() {
        let root = EvolutionNode::new(
            10,
            vec![EvolutionNode::leaf(11), EvolutionNode::new(11, vec![EvolutionNode::leaf(10)])],
        );
        assert_eq!(flatten_evolution_chain(&root), vec![10, 11]);
    }

    #[test]
    fn test_flatten_depth_bounded() {
        let mut node = EvolutionNode::leaf(100);
        for id in (1..100).rev() {
            node = EvolutionNode::new(id, vec![node]);
        }
        let ids = flatten_evolution_chain(&node);
        assert_eq!(ids.len(), MAX_EVOLUTION_DEPTH);
        assert_eq!(ids.first(), Some(&1));
    }

    #[test]
    fn test_from_raw() {
        let raw = link(4, vec![link(5, vec![link(6, vec![])])]);
        let node = EvolutionNode::from_raw(&raw).unwrap();
        assert_eq!(node.species_id, 4);
        assert_eq!(node.children[0].children[0].species_id, 6);
        assert_eq!(flatten_raw_chain(&raw), vec![4, 5, 6]);
    }

    #[test]
    fn test_from_raw_malformed() {
        let mut raw = link(4, vec![link(5, vec![])]);
        raw.evolves_to[0].species = Some(NamedResource {
            name: Some("broken".to_string()),
            url: Some("https://pokeapi.co/api/v2/pokemon-species/".to_string()),
        });
        assert!(EvolutionNode::from_raw(&raw).is_err());
        assert!(flatten_raw_chain(&raw).is_empty());

        let speciesless = RawChainLink::default();
        assert!(matches!(
            EvolutionNode::from_raw(&speciesless),
            Err(ParseError::MissingField(_))
        ));
        assert!(flatten_raw_chain(&speciesless).is_empty());
    }
}
