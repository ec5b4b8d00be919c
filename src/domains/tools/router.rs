//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! This module builds the ToolRouter by delegating to the tool definitions
//! themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    EvolutionChainTool, PokemonInfoTool, PokemonMovesTool, PopularPokemonTool, TournamentSquadTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(EvolutionChainTool::create_route(config.clone()))
        .with_route(PokemonInfoTool::create_route(config.clone()))
        .with_route(PokemonMovesTool::create_route(config.clone()))
        .with_route(PopularPokemonTool::create_route())
        .with_route(TournamentSquadTool::create_route(config))
}
