pub mod client;
pub mod types;

pub use client::{ApiError, PokeClient, PokeSource};
pub use types::{
    ChainLink, EvolutionChain, EvolutionDetail, NamedResource, Pokemon, PokemonPage,
    PokemonSpecies, TypeSlot,
};
