//! Deserialized PokeAPI response shapes.
//!
//! Only the fields the tools actually render are modeled; everything else in
//! the (large) upstream payloads is ignored during deserialization. Records
//! are immutable once fetched and owned by the invocation that fetched them.

use serde::Deserialize;

/// A named entity reference, e.g. `{"name": "static"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// A reference to another API resource by URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

/// One entry in a Pokémon's stats array.
#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: i64,
    pub stat: NamedResource,
}

/// One entry in a Pokémon's types array.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

/// One entry in a Pokémon's abilities array.
#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

/// One entry in a Pokémon's moves array.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

/// Response of `GET {base}/pokemon/{name}`.
///
/// Sequences keep the original response order; the tools render them
/// in that order.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    pub species: Option<ResourceRef>,
}

impl PokemonRecord {
    /// Move names in the record's original order.
    pub fn move_names(&self) -> Vec<&str> {
        self.moves.iter().map(|m| m.move_.name.as_str()).collect()
    }
}

/// Response of a species lookup; only the evolution chain link is used.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    pub evolution_chain: Option<ResourceRef>,
}

/// Response of an evolution chain lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainRecord {
    pub chain: Option<EvolutionNode>,
}

/// A node in the species evolution tree.
///
/// A leaf has an empty `evolves_to`; a branching node lists every possible
/// next form in the API's order.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Linearize the tree along its primary branch.
    ///
    /// Starting at this node, append the species name and advance to the
    /// first child until a leaf is reached. Siblings after the first child
    /// are discarded, so a branching tree (e.g. Eevee's) yields only its
    /// first-listed path.
    pub fn primary_branch(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut node = self;
        loop {
            names.push(node.species.name.as_str());
            match node.evolves_to.first() {
                Some(next) => node = next,
                None => break,
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, evolves_to: Vec<EvolutionNode>) -> EvolutionNode {
        EvolutionNode {
            species: NamedResource {
                name: name.to_string(),
            },
            evolves_to,
        }
    }

    #[test]
    fn test_primary_branch_single_node() {
        let root = node("ditto", vec![]);
        assert_eq!(root.primary_branch(), vec!["ditto"]);
    }

    #[test]
    fn test_primary_branch_linear_chain() {
        let root = node(
            "bulbasaur",
            vec![node("ivysaur", vec![node("venusaur", vec![])])],
        );
        assert_eq!(root.primary_branch(), vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn test_primary_branch_discards_siblings() {
        let root = node(
            "eevee",
            vec![node("vaporeon", vec![]), node("jolteon", vec![])],
        );
        assert_eq!(root.primary_branch(), vec!["eevee", "vaporeon"]);
    }

    #[test]
    fn test_pokemon_record_from_json() {
        let json = r#"{
            "name": "pikachu",
            "stats": [
                {"base_stat": 35, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 55, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}}
            ],
            "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
            "abilities": [{"ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}, "is_hidden": false, "slot": 1}],
            "moves": [{"move": {"name": "thunder-shock", "url": "https://pokeapi.co/api/v2/move/84/"}}],
            "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}
        }"#;

        let record: PokemonRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.stats.len(), 2);
        assert_eq!(record.stats[0].stat.name, "hp");
        assert_eq!(record.stats[0].base_stat, 35);
        assert_eq!(record.types[0].type_.name, "electric");
        assert_eq!(record.abilities[0].ability.name, "static");
        assert_eq!(record.move_names(), vec!["thunder-shock"]);
        assert_eq!(
            record.species.unwrap().url,
            "https://pokeapi.co/api/v2/pokemon-species/25/"
        );
    }

    #[test]
    fn test_pokemon_record_missing_arrays_default_empty() {
        // Arrays the formatter tolerates being absent
        let record: PokemonRecord = serde_json::from_str(r#"{"name": "missingno"}"#).unwrap();
        assert!(record.stats.is_empty());
        assert!(record.moves.is_empty());
        assert!(record.species.is_none());
    }

    #[test]
    fn test_species_record_from_json() {
        let json = r#"{
            "name": "pikachu",
            "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/10/"}
        }"#;
        let record: SpeciesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.evolution_chain.unwrap().url,
            "https://pokeapi.co/api/v2/evolution-chain/10/"
        );
    }

    #[test]
    fn test_evolution_chain_record_from_json() {
        let json = r#"{
            "chain": {
                "species": {"name": "pichu", "url": "https://pokeapi.co/api/v2/pokemon-species/172/"},
                "evolves_to": [{
                    "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"},
                    "evolves_to": [{
                        "species": {"name": "raichu", "url": "https://pokeapi.co/api/v2/pokemon-species/26/"},
                        "evolves_to": []
                    }]
                }]
            }
        }"#;
        let record: EvolutionChainRecord = serde_json::from_str(json).unwrap();
        let chain = record.chain.unwrap();
        assert_eq!(chain.primary_branch(), vec!["pichu", "pikachu", "raichu"]);
    }
}
