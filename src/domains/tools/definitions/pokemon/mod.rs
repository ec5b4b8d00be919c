//! Pokémon tools module.
//!
//! This module provides the domain-specific tools backed by PokeAPI:
//! - `info`: detailed info about a single Pokémon
//! - `squad`: tournament squad built from a fixed roster
//! - `popular`: static list of popular picks
//! - `moves`: a Pokémon's move list
//! - `evolution`: evolution chain resolution (the interesting one)

pub mod common;
pub mod evolution;
pub mod info;
pub mod moves;
pub mod popular;
pub mod squad;

// Re-export domain-specific tools
pub use evolution::{EvolutionChainParams, EvolutionChainTool};
pub use info::{PokemonInfoParams, PokemonInfoTool};
pub use moves::{PokemonMovesParams, PokemonMovesTool};
pub use popular::PopularPokemonTool;
pub use squad::TournamentSquadTool;
