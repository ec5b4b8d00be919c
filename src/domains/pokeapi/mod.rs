//! PokeAPI domain module.
//!
//! This module provides the upstream data access layer for the MCP tools:
//!
//! - `client`: async HTTP client for by-name and by-URL lookups
//! - `models`: deserialized response shapes, including the evolution tree
//! - `error`: fetch failure classification (internal to this domain)
//!
//! The public fetch surface is deliberately coarse: every failure collapses
//! to `None` and callers render a "no data" message instead of propagating
//! an error. The finer-grained [`FetchError`] reason is only logged.

mod client;
mod error;
mod models;

pub use client::PokeApiClient;
pub use error::FetchError;
pub use models::{
    AbilitySlot, EvolutionChainRecord, EvolutionNode, MoveSlot, NamedResource, PokemonRecord,
    ResourceRef, SpeciesRecord, StatSlot, TypeSlot,
};
