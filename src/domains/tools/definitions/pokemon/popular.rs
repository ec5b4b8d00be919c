//! Popular Pokémon tool definition.
//!
//! Returns a fixed list of popular tournament-ready Pokémon. No network
//! access and no parameters; the output is identical on every call.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::text_result;

/// The fixed list, one name per output line.
const POPULAR: [&str; 6] = [
    "Charizard",
    "Garchomp",
    "Lucario",
    "Dragonite",
    "Metagross",
    "Gardevoir",
];

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the popular Pokémon tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PopularPokemonParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// Popular Pokémon tool - static list of popular picks.
pub struct PopularPokemonTool;

impl PopularPokemonTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_popular_pokemon";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List popular tournament-ready Pokémon.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute() -> CallToolResult {
        info!("Popular list tool called");
        text_result(POPULAR.join("\n"))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PopularPokemonParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the tool router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok(Self::execute()) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
