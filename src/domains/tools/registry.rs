//! Tool Registry - central registration and metadata for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Tool metadata for listing

use rmcp::model::Tool;

use super::definitions::{
    EvolutionChainTool, PokemonInfoTool, PokemonMovesTool, PopularPokemonTool, TournamentSquadTool,
};

/// Tool registry - single source of truth for the available tool set.
///
/// The router in `router.rs` must stay in sync with this list; a test in
/// that module checks it.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            EvolutionChainTool::NAME,
            PokemonInfoTool::NAME,
            PokemonMovesTool::NAME,
            PopularPokemonTool::NAME,
            TournamentSquadTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            EvolutionChainTool::to_tool(),
            PokemonInfoTool::to_tool(),
            PokemonMovesTool::to_tool(),
            PopularPokemonTool::to_tool(),
            TournamentSquadTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"get_pokemon_info"));
        assert!(names.contains(&"create_tournament_squad"));
        assert!(names.contains(&"list_popular_pokemon"));
        assert!(names.contains(&"list_pokemon_moves"));
        assert!(names.contains(&"get_pokemon_evolution_chain"));
    }

    #[test]
    fn test_registry_metadata_has_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some(), "{} lacks a description", tool.name);
        }
    }
}
