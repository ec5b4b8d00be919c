//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod pokemon;

pub use pokemon::{
    EvolutionChainParams, EvolutionChainTool, PokemonInfoParams, PokemonInfoTool,
    PokemonMovesParams, PokemonMovesTool, PopularPokemonTool, TournamentSquadTool,
};
