//! Pokémon moves tool definition.
//!
//! Fetches a Pokémon by name and lists its moves, limited to a clamped
//! caller-supplied count.

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

use super::common::{capitalize, clamp_limit, default_limit, no_data_message, text_result};
use crate::core::config::Config;
use crate::domains::pokeapi::{PokeApiClient, PokemonRecord};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the Pokémon moves tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PokemonMovesParams {
    /// Name of the Pokémon to look up (case-insensitive).
    #[schemars(description = "Pokémon name, e.g. 'pikachu'")]
    pub name: String,

    /// Maximum number of moves to list (default: 10, clamped to 1-50).
    #[schemars(description = "Maximum number of moves (default: 10, clamped to 1-50)")]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Pokémon moves tool - lists a Pokémon's moves.
pub struct PokemonMovesTool;

impl PokemonMovesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_pokemon_moves";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List a Pokémon's moves by name, limited to at most 50 entries.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name, limit = params.limit))]
    pub async fn execute(params: &PokemonMovesParams, config: &Config) -> CallToolResult {
        info!("Moves tool called for: {}", params.name);

        let client = PokeApiClient::from_config(&config.pokeapi);
        match client.fetch_pokemon(&params.name).await {
            Some(record) => text_result(Self::render(&record, params)),
            None => text_result(no_data_message(&params.name)),
        }
    }

    /// Render the move listing for a fetched record.
    fn render(record: &PokemonRecord, params: &PokemonMovesParams) -> String {
        let moves = record.move_names();
        if moves.is_empty() {
            return format!("No moves found for Pokémon: {}", params.name);
        }

        let limit = clamp_limit(params.limit);
        format!(
            "Moves for {}:\n{}",
            capitalize(&record.name),
            moves[..moves.len().min(limit)].join("\n")
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PokemonMovesParams>(),
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
                let params: PokemonMovesParams =
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
    use crate::domains::pokeapi::{MoveSlot, NamedResource};
    use rmcp::model::RawContent;

    fn record_with_moves(count: usize) -> PokemonRecord {
        PokemonRecord {
            name: "pikachu".to_string(),
            stats: vec![],
            types: vec![],
            abilities: vec![],
            moves: (0..count)
                .map(|i| MoveSlot {
                    move_: NamedResource {
                        name: format!("move-{}", i),
                    },
                })
                .collect(),
            species: None,
        }
    }

    fn params(limit: i64) -> PokemonMovesParams {
        PokemonMovesParams {
            name: "pikachu".to_string(),
            limit,
        }
    }

    fn move_count(rendered: &str) -> usize {
        // Subtract the heading line
        rendered.lines().count() - 1
    }

    #[test]
    fn test_params_default_limit() {
        let parsed: PokemonMovesParams = serde_json::from_str(r#"{"name": "pikachu"}"#).unwrap();
        assert_eq!(parsed.limit, 10);
    }

    #[test]
    fn test_render_heading_and_order() {
        let rendered = PokemonMovesTool::render(&record_with_moves(3), &params(10));
        assert_eq!(rendered, "Moves for Pikachu:\nmove-0\nmove-1\nmove-2");
    }

    #[test]
    fn test_render_zero_limit_behaves_as_one() {
        let rendered = PokemonMovesTool::render(&record_with_moves(5), &params(0));
        assert_eq!(move_count(&rendered), 1);
    }

    #[test]
    fn test_render_huge_limit_caps_at_fifty() {
        let rendered = PokemonMovesTool::render(&record_with_moves(80), &params(1000));
        assert_eq!(move_count(&rendered), 50);
    }

    #[test]
    fn test_render_limit_beyond_available_moves() {
        let rendered = PokemonMovesTool::render(&record_with_moves(4), &params(50));
        assert_eq!(move_count(&rendered), 4);
    }

    #[test]
    fn test_render_no_moves() {
        let rendered = PokemonMovesTool::render(&record_with_moves(0), &params(10));
        assert_eq!(rendered, "No moves found for Pokémon: pikachu");
    }

    #[tokio::test]
    async fn test_execute_unreachable_host_reports_no_data() {
        let mut config = Config::default();
        config.pokeapi.base_url = "http://pokeapi.invalid/api/v2".to_string();

        let result = PokemonMovesTool::execute(&params(10), &config).await;
        assert!(!result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("No data found"));
            assert!(text.text.contains("pikachu"));
        } else {
            panic!("expected text content");
        }
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_execute_live() {
        let result = PokemonMovesTool::execute(&params(5), &Config::default()).await;
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.starts_with("Moves for Pikachu:\n"));
            assert_eq!(text.text.lines().count(), 6);
        } else {
            panic!("expected text content");
        }
    }
}
