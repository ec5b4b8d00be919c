//! Evolution chain tool definition.
//!
//! Resolves a Pokémon's evolution chain through three sequential lookups
//! (Pokémon -> species -> evolution chain) and renders the chain's primary
//! branch as an arrow-joined line. Each lookup stage is a terminal failure
//! gate producing a stage-specific message; there is no partial output.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::common::{capitalize, no_data_message, text_result};
use crate::core::config::Config;
use crate::domains::pokeapi::{EvolutionNode, PokeApiClient};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the evolution chain tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EvolutionChainParams {
    /// Name of the Pokémon whose chain to resolve (case-insensitive).
    #[schemars(description = "Pokémon name, e.g. 'bulbasaur'")]
    pub name: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Evolution chain tool - linearizes a species evolution tree.
pub struct EvolutionChainTool;

impl EvolutionChainTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_pokemon_evolution_chain";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a Pokémon's evolution chain. Follows the \
        first-listed evolution at each stage; alternative branches are not shown.";

    /// Execute the tool logic.
    ///
    /// Four fetch/extract gates, strictly sequential. Any empty result
    /// replaces the whole output with a failure message.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: &EvolutionChainParams, config: &Config) -> CallToolResult {
        info!("Evolution chain tool called for: {}", params.name);
        let name = &params.name;

        let client = PokeApiClient::from_config(&config.pokeapi);

        let Some(record) = client.fetch_pokemon(name).await else {
            return text_result(no_data_message(name));
        };

        let Some(species_ref) = record.species else {
            return text_result(format!("No species data found for Pokémon: {}", name));
        };

        let chain_url = match client.fetch_species(&species_ref.url).await {
            Some(species) => match species.evolution_chain {
                Some(chain_ref) => chain_ref.url,
                None => return text_result(Self::no_chain_message(name)),
            },
            None => return text_result(Self::no_chain_message(name)),
        };

        let root = match client.fetch_evolution_chain(&chain_url).await {
            Some(chain) => match chain.chain {
                Some(root) => root,
                None => return text_result(Self::no_chain_message(name)),
            },
            None => return text_result(Self::no_chain_message(name)),
        };

        debug!("Resolved chain root: {}", root.species.name);
        text_result(Self::render(&root, name))
    }

    /// Render the primary branch, falling back to the no-chain message if
    /// the walk somehow produced nothing.
    fn render(root: &EvolutionNode, name: &str) -> String {
        let names: Vec<String> = root
            .primary_branch()
            .into_iter()
            .map(capitalize)
            .collect();

        if names.is_empty() {
            return Self::no_chain_message(name);
        }
        format!("Evolution Chain:\n{}", names.join(" -> "))
    }

    fn no_chain_message(name: &str) -> String {
        format!("No evolution chain found for Pokémon: {}", name)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<EvolutionChainParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the tool router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: EvolutionChainParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
