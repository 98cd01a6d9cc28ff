#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ParseError, RawEvolutionChain, RawPokemon, RawSpeciesDetail, SpeciesCount, parse_payload,
        resource_id,
    };

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "types": [
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}},
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}}
        ],
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack"}}
        ],
        "sprites": {
            "front_default": "https://img/front/1.png",
            "other": {"official-artwork": {"front_default": "https://img/art/1.png"}}
        },
        "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
        "height": 7
    }"#;

    #[test]
    fn test_resource_id() {
        assert_eq!(
            resource_id("https://pokeapi.co/api/v2/pokemon-species/4/"),
            Ok(4)
        );
        assert_eq!(resource_id("https://pokeapi.co/api/v2/pokemon-species/25"), Ok(25));
    }

    #[test]
    fn test_resource_id_invalid() {
        assert!(matches!(
            resource_id("https://pokeapi.co/api/v2/pokemon-species/"),
            Err(ParseError::InvalidResourceUrl(_))
        ));
        assert!(resource_id("https://pokeapi.co/api/v2/pokemon-species/abc/").is_err());
        assert!(resource_id("https://pokeapi.co/api/v2/pokemon-species/0/").is_err());
        assert!(resource_id("").is_err());
    }

    #[test]
    fn test_parse_pokemon() {
        let pokemon: RawPokemon = parse_payload(BULBASAUR).unwrap();

        assert_eq!(pokemon.id, Some(1));
        assert_eq!(pokemon.name.as_deref(), Some("bulbasaur"));
        assert_eq!(pokemon.type_tags(), vec!["grass", "poison"]);
        assert_eq!(pokemon.stats[0].name(), Some("hp"));
        assert_eq!(pokemon.stats[0].base_stat, Some(45));
        assert_eq!(pokemon.image(), Some("https://img/art/1.png"));
        assert_eq!(
            pokemon.species_url(),
            Some("https://pokeapi.co/api/v2/pokemon-species/1/")
        );
    }

    #[test]
    fn test_parse_pokemon_missing_fields() {
        let pokemon: RawPokemon = parse_payload(r#"{"name": "missingno"}"#).unwrap();

        assert_eq!(pokemon.id, None);
        assert!(pokemon.types.is_empty());
        assert!(pokemon.stats.is_empty());
        assert_eq!(pokemon.image(), None);
        assert_eq!(pokemon.species_url(), None);
    }

    #[test]
    fn test_image_falls_back_to_default_sprite() {
        let pokemon: RawPokemon = parse_payload(
            r#"{"id": 7, "sprites": {"front_default": "https://img/front/7.png", "other": {}}}"#,
        )
        .unwrap();

        assert_eq!(pokemon.image(), Some("https://img/front/7.png"));
    }

    #[test]
    fn test_parse_species_detail() {
        let detail: RawSpeciesDetail = parse_payload(
            r#"{
                "flavor_text_entries": [
                    {"flavor_text": "A strange seed", "language": {"name": "en", "url": "x"}}
                ],
                "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/1/"}
            }"#,
        )
        .unwrap();

        assert_eq!(detail.flavor_text_entries.len(), 1);
        assert_eq!(detail.flavor_text_entries[0].language(), Some("en"));
        assert_eq!(
            detail.evolution_chain_url(),
            Some("https://pokeapi.co/api/v2/evolution-chain/1/")
        );
    }

    #[test]
    fn test_parse_evolution_chain() {
        let chain: RawEvolutionChain = parse_payload(
            r#"{"chain": {
                "species": {"name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon-species/4/"},
                "evolves_to": [{
                    "species": {"name": "charmeleon", "url": "https://pokeapi.co/api/v2/pokemon-species/5/"},
                    "evolves_to": []
                }]
            }}"#,
        )
        .unwrap();

        let root = chain.chain.unwrap();
        assert_eq!(root.species.unwrap().id(), Ok(4));
        assert_eq!(root.evolves_to.len(), 1);
        assert!(root.evolves_to[0].evolves_to.is_empty());
    }

    #[test]
    fn test_parse_count() {
        let count: SpeciesCount =
            parse_payload(r#"{"count": 1302, "next": null, "results": []}"#).unwrap();
        assert_eq!(count.count, Some(1302));
    }

    #[test]
    fn test_parse_invalid_payload() {
        let result: Result<RawPokemon, _> = parse_payload("not json");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
