//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server:
//!
//! - `pokeapi`: HTTP client and response models for the upstream PokeAPI
//! - `tools`: MCP tool definitions, routing, and registration

pub mod pokeapi;
pub mod tools;
