//! Pokémon info tool definition.
//!
//! Fetches a Pokémon by name and renders its types, abilities, and base
//! stats as text.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{capitalize, no_data_message, text_result};
use crate::core::config::Config;
use crate::domains::pokeapi::{PokeApiClient, PokemonRecord};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the Pokémon info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PokemonInfoParams {
    /// Name of the Pokémon to look up (case-insensitive).
    #[schemars(description = "Pokémon name, e.g. 'pikachu'")]
    pub name: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Pokémon info tool - detailed info about a single Pokémon.
pub struct PokemonInfoTool;

impl PokemonInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_pokemon_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get detailed info about a Pokémon by name: its types, abilities, and base stats.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: &PokemonInfoParams, config: &Config) -> CallToolResult {
        info!("Info tool called for: {}", params.name);

        let client = PokeApiClient::from_config(&config.pokeapi);
        match client.fetch_pokemon(&params.name).await {
            Some(record) => text_result(Self::render(&record)),
            None => text_result(no_data_message(&params.name)),
        }
    }

    /// Render a fetched record as display text.
    fn render(record: &PokemonRecord) -> String {
        let types: Vec<&str> = record.types.iter().map(|t| t.type_.name.as_str()).collect();
        let abilities: Vec<&str> = record
            .abilities
            .iter()
            .map(|a| a.ability.name.as_str())
            .collect();
        let stats: Vec<String> = record
            .stats
            .iter()
            .map(|s| format!("{}: {}", s.stat.name, s.base_stat))
            .collect();

        format!(
            "Name: {}\nTypes: {}\nAbilities: {}\nStats: {}",
            capitalize(&record.name),
            types.join(", "),
            abilities.join(", "),
            stats.join(", ")
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PokemonInfoParams>(),
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
                let params: PokemonInfoParams =
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::pokeapi::{AbilitySlot, NamedResource, StatSlot, TypeSlot};
    use rmcp::model::RawContent;

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
        }
    }

    fn sample_record() -> PokemonRecord {
        PokemonRecord {
            name: "pikachu".to_string(),
            stats: vec![
                StatSlot {
                    base_stat: 35,
                    stat: named("hp"),
                },
                StatSlot {
                    base_stat: 55,
                    stat: named("attack"),
                },
            ],
            types: vec![TypeSlot {
                type_: named("electric"),
            }],
            abilities: vec![
                AbilitySlot {
                    ability: named("static"),
                },
                AbilitySlot {
                    ability: named("lightning-rod"),
                },
            ],
            moves: vec![],
            species: None,
        }
    }

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_render_keeps_original_order() {
        let rendered = PokemonInfoTool::render(&sample_record());
        assert_eq!(
            rendered,
            "Name: Pikachu\nTypes: electric\nAbilities: static, lightning-rod\nStats: hp: 35, attack: 55"
        );
    }

    #[test]
    fn test_params_require_name() {
        let result: Result<PokemonInfoParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_unreachable_host_reports_no_data() {
        let mut config = Config::default();
        config.pokeapi.base_url = "http://pokeapi.invalid/api/v2".to_string();

        let params = PokemonInfoParams {
            name: "pikachu".to_string(),
        };
        let result = PokemonInfoTool::execute(&params, &config).await;

        // Domain failures are embedded as text in a successful result
        assert!(!result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.contains("No data found"));
        assert!(text.contains("pikachu"));
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_execute_live() {
        let params = PokemonInfoParams {
            name: "Pikachu".to_string(),
        };
        let result = PokemonInfoTool::execute(&params, &Config::default()).await;
        let text = result_text(&result);
        assert!(text.contains("Name: Pikachu"));
        assert!(text.contains("electric"));
    }
}
