//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::types::{
    AbilitySlot, Artwork, ChainLink, EvolutionChain, EvolutionDetail, Genus, MoveSlot,
    NamedResource, Pokemon, PokemonPage, PokemonSpecies, ResourceUrl, SpriteOther, Sprites,
    StatEntry, TypeSlot,
};
use crate::api::{ApiError, PokeSource};
use crate::core::state::App;

fn named(name: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: format!("https://example/{name}/"),
    }
}

/// One page of summary records with the given names and cursor.
pub fn sample_page(names: &[&str], next: Option<&str>) -> PokemonPage {
    PokemonPage {
        count: 1302,
        next: next.map(|s| s.to_string()),
        previous: None,
        results: names.iter().map(|n| named(n)).collect(),
    }
}

/// A grass/poison starter-shaped detail record.
pub fn sample_pokemon(name: &str) -> Pokemon {
    let stats = [
        ("hp", 45),
        ("attack", 49),
        ("defense", 49),
        ("special-attack", 65),
        ("special-defense", 65),
        ("speed", 45),
    ];
    Pokemon {
        name: name.to_string(),
        order: 1,
        height: 7,
        weight: 69,
        abilities: vec![
            AbilitySlot {
                ability: named("overgrow"),
            },
            AbilitySlot {
                ability: named("chlorophyll"),
            },
        ],
        types: vec![
            TypeSlot {
                slot: 1,
                kind: named("grass"),
            },
            TypeSlot {
                slot: 2,
                kind: named("poison"),
            },
        ],
        stats: stats
            .iter()
            .map(|(n, v)| StatEntry {
                base_stat: *v,
                effort: 0,
                stat: named(n),
            })
            .collect(),
        sprites: Sprites {
            other: SpriteOther {
                official_artwork: Artwork {
                    front_default: Some(format!("https://img/{name}.png")),
                },
            },
        },
        moves: vec![
            MoveSlot {
                data: named("tackle"),
            },
            MoveSlot {
                data: named("vine-whip"),
            },
        ],
        species: named(name),
    }
}

pub fn sample_species() -> PokemonSpecies {
    PokemonSpecies {
        genera: vec![Genus {
            genus: "Seed Pokémon".to_string(),
            language: named("en"),
        }],
        gender_rate: 1,
        egg_groups: vec![named("monster"), named("plant")],
        habitat: Some(named("grassland")),
        evolution_chain: ResourceUrl {
            url: "https://example/evolution-chain/1/".to_string(),
        },
    }
}

/// bulbasaur → ivysaur (Lv 16) → venusaur (Lv 32)
pub fn sample_chain() -> ChainLink {
    let edge = |level| {
        vec![EvolutionDetail {
            min_level: Some(level),
            trigger: named("level-up"),
        }]
    };
    ChainLink {
        species: named("bulbasaur"),
        evolution_details: vec![],
        evolves_to: vec![ChainLink {
            species: named("ivysaur"),
            evolution_details: edge(16),
            evolves_to: vec![ChainLink {
                species: named("venusaur"),
                evolution_details: edge(32),
                evolves_to: vec![],
            }],
        }],
    }
}

/// A canned [`PokeSource`]: each resource kind either answers with its
/// sample or fails with a network error. Build with [`StubSource::healthy`]
/// and knock out stages with the `without_*` methods.
#[derive(Default)]
pub struct StubSource {
    pub page: Option<PokemonPage>,
    pub pokemon: Option<Pokemon>,
    pub species: Option<PokemonSpecies>,
    pub chain: Option<ChainLink>,
}

impl StubSource {
    pub fn healthy() -> Self {
        Self {
            page: Some(sample_page(&["bulbasaur", "ivysaur"], Some("page-2"))),
            pokemon: Some(sample_pokemon("bulbasaur")),
            species: Some(sample_species()),
            chain: Some(sample_chain()),
        }
    }

    pub fn without_pokemon(mut self) -> Self {
        self.pokemon = None;
        self
    }

    pub fn without_species(mut self) -> Self {
        self.species = None;
        self
    }

    pub fn without_chain(mut self) -> Self {
        self.chain = None;
        self
    }
}

fn unavailable() -> ApiError {
    ApiError::Network("stub: unavailable".to_string())
}

#[async_trait]
impl PokeSource for StubSource {
    async fn page(&self, _cursor: Option<&str>) -> Result<PokemonPage, ApiError> {
        self.page.clone().ok_or_else(unavailable)
    }

    async fn pokemon(&self, _name: &str) -> Result<Pokemon, ApiError> {
        self.pokemon.clone().ok_or_else(unavailable)
    }

    async fn species(&self, _url: &str) -> Result<PokemonSpecies, ApiError> {
        self.species.clone().ok_or_else(unavailable)
    }

    async fn evolution_chain(&self, _url: &str) -> Result<EvolutionChain, ApiError> {
        self.chain
            .clone()
            .map(|chain| EvolutionChain { chain })
            .ok_or_else(unavailable)
    }
}

/// Creates a test App over a stub source that never answers.
pub fn test_app() -> App {
    App::new(Arc::new(StubSource::default()))
}
