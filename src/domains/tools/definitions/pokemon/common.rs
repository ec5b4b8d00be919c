//! Common utilities shared across Pokémon tools.
//!
//! This module provides shared functionality like name capitalization,
//! limit clamping, and result formatting helpers.

use rmcp::model::{CallToolResult, Content};

/// Smallest accepted move list limit.
pub const MIN_MOVE_LIMIT: i64 = 1;

/// Largest accepted move list limit.
pub const MAX_MOVE_LIMIT: i64 = 50;

/// Capitalize a name for display: first character uppercased, the rest
/// lowercased ("bulbasaur" -> "Bulbasaur", "MEW" -> "Mew").
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Clamp a caller-supplied move limit to the inclusive range [1, 50].
pub fn clamp_limit(limit: i64) -> usize {
    limit.clamp(MIN_MOVE_LIMIT, MAX_MOVE_LIMIT) as usize
}

/// Default move list limit.
pub fn default_limit() -> i64 {
    10
}

/// The uniform "fetch came back empty" message.
pub fn no_data_message(name: &str) -> String {
    format!("No data found for Pokémon: {}", name)
}

/// Create a success result with text content.
///
/// Domain failures ("no data found", "no evolution chain found") also go
/// through here: tools embed them as readable text in a successful result
/// rather than returning a structured MCP error.
pub fn text_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize("MEW"), "Mew");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(10), 10);
        assert_eq!(clamp_limit(1), 1);
        assert_eq!(clamp_limit(50), 50);
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(-5), 1);
        assert_eq!(clamp_limit(1000), 50);
    }

    #[test]
    fn test_no_data_message_names_the_pokemon() {
        let msg = no_data_message("missingno");
        assert!(msg.contains("No data found"));
        assert!(msg.contains("missingno"));
    }
}
