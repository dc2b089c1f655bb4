//! # Remote Data Model
//!
//! Serde shapes for the PokéAPI-style REST service. The wire format is owned
//! by the remote side: field names and nesting mirror its JSON exactly, and
//! everything the UI needs is reached through `NamedResource` hypermedia
//! references embedded in prior responses.

use serde::Deserialize;

/// A `{name, url}` reference to another resource. This is both the summary
/// record in list pages and the hypermedia link used for dependent fetches.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare `{url}` reference (the evolution-chain link carries no name).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceUrl {
    pub url: String,
}

/// One page of summary records. `next` is the opaque cursor for the
/// following page; `None` means the listing is exhausted.
#[derive(Deserialize, Debug, Clone)]
pub struct PokemonPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot {
    /// Display order of the type badge, assigned by the remote side.
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatEntry {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}

/// Sprite locators. Only the official-artwork rendition is carried; the
/// terminal UI cannot draw it but the locator is part of the record.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Sprites {
    #[serde(default)]
    pub other: SpriteOther,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SpriteOther {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub data: NamedResource,
}

/// Full detail record for one creature.
#[derive(Deserialize, Debug, Clone)]
pub struct Pokemon {
    pub name: String,
    pub order: i32,
    pub height: u32,
    pub weight: u32,
    pub abilities: Vec<AbilitySlot>,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
    pub moves: Vec<MoveSlot>,
    /// Link to the species record, the first hop of the detail sequence.
    pub species: NamedResource,
}

impl Pokemon {
    /// Name of the first-slot type, the one that drives background and gauge
    /// coloring. Falls back to "normal" when the type list is empty.
    pub fn primary_type(&self) -> &str {
        self.types
            .iter()
            .min_by_key(|t| t.slot)
            .map(|t| t.kind.name.as_str())
            .unwrap_or("normal")
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

/// Taxonomic metadata plus the link to the evolution chain, the second hop
/// of the detail sequence.
#[derive(Deserialize, Debug, Clone)]
pub struct PokemonSpecies {
    pub genera: Vec<Genus>,
    pub gender_rate: i8,
    pub egg_groups: Vec<NamedResource>,
    pub habitat: Option<NamedResource>,
    pub evolution_chain: ResourceUrl,
}

impl PokemonSpecies {
    /// The English genus with the trailing "Pokémon" stripped, or "N/A" when
    /// no English entry exists.
    pub fn english_genus(&self) -> String {
        self.genera
            .iter()
            .find(|g| g.language.name == "en")
            .map(|g| g.genus.replace("Pokémon", "").trim().to_string())
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct EvolutionDetail {
    pub min_level: Option<u32>,
    pub trigger: NamedResource,
}

/// One node of the evolution tree. Self-referential; the remote side
/// guarantees the tree is acyclic and finite, but traversal still enforces a
/// local depth cap (see `core::chain`).
#[derive(Deserialize, Debug, Clone)]
pub struct ChainLink {
    pub species: NamedResource,
    pub evolves_to: Vec<ChainLink>,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserializes_with_null_next() {
        let json = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://example/pokemon/1/"},
                {"name": "ivysaur", "url": "https://example/pokemon/2/"}
            ]
        }"#;
        let page: PokemonPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 2);
        assert!(page.next.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "bulbasaur");
    }

    #[test]
    fn test_pokemon_deserializes_nested_slots() {
        let json = r#"{
            "name": "bulbasaur",
            "order": 1,
            "height": 7,
            "weight": 69,
            "abilities": [{"ability": {"name": "overgrow", "url": "u"}}],
            "types": [
                {"slot": 2, "type": {"name": "poison", "url": "u"}},
                {"slot": 1, "type": {"name": "grass", "url": "u"}}
            ],
            "stats": [{"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
            "sprites": {"other": {"official-artwork": {"front_default": "https://img/1.png"}}},
            "moves": [{"move": {"name": "tackle", "url": "u"}}],
            "species": {"name": "bulbasaur", "url": "https://example/species/1/"}
        }"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.primary_type(), "grass");
        assert_eq!(pokemon.abilities[0].ability.name, "overgrow");
        assert_eq!(
            pokemon.sprites.other.official_artwork.front_default.as_deref(),
            Some("https://img/1.png")
        );
    }

    #[test]
    fn test_primary_type_falls_back_to_normal() {
        let json = r#"{
            "name": "missingno",
            "order": 0,
            "height": 0,
            "weight": 0,
            "abilities": [],
            "types": [],
            "stats": [],
            "moves": [],
            "species": {"name": "missingno", "url": "u"}
        }"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.primary_type(), "normal");
    }

    #[test]
    fn test_english_genus_strips_suffix() {
        let species = PokemonSpecies {
            genera: vec![
                Genus {
                    genus: "たねポケモン".to_string(),
                    language: NamedResource {
                        name: "ja".to_string(),
                        url: "u".to_string(),
                    },
                },
                Genus {
                    genus: "Seed Pokémon".to_string(),
                    language: NamedResource {
                        name: "en".to_string(),
                        url: "u".to_string(),
                    },
                },
            ],
            gender_rate: 1,
            egg_groups: vec![],
            habitat: None,
            evolution_chain: ResourceUrl {
                url: "u".to_string(),
            },
        };
        assert_eq!(species.english_genus(), "Seed");
    }

    #[test]
    fn test_english_genus_missing_is_na() {
        let species = PokemonSpecies {
            genera: vec![],
            gender_rate: -1,
            egg_groups: vec![],
            habitat: None,
            evolution_chain: ResourceUrl {
                url: "u".to_string(),
            },
        };
        assert_eq!(species.english_genus(), "N/A");
    }

    #[test]
    fn test_chain_link_recursive_deserialization() {
        let json = r#"{
            "chain": {
                "species": {"name": "bulbasaur", "url": "u"},
                "evolution_details": [],
                "evolves_to": [{
                    "species": {"name": "ivysaur", "url": "u"},
                    "evolution_details": [{"min_level": 16, "trigger": {"name": "level-up", "url": "u"}}],
                    "evolves_to": []
                }]
            }
        }"#;
        let chain: EvolutionChain = serde_json::from_str(json).unwrap();
        assert_eq!(chain.chain.species.name, "bulbasaur");
        assert_eq!(chain.chain.evolves_to[0].species.name, "ivysaur");
        assert_eq!(
            chain.chain.evolves_to[0].evolution_details[0].min_level,
            Some(16)
        );
    }
}
