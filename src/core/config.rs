//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};

use super::transport::TransportConfig;

/// Default base URL for the upstream PokeAPI service.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream PokeAPI configuration.
    pub pokeapi: PokeApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the upstream PokeAPI service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokeApiConfig {
    /// Base URL for by-name lookups, e.g. `{base_url}/pokemon/{name}`.
    /// Species and evolution-chain lookups use absolute URLs returned
    /// by previous responses.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pokeapi-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            pokeapi: PokeApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_POKEAPI_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("MCP_POKEAPI_BASE_URL") {
            // A trailing slash would produce double slashes in request URLs.
            config.pokeapi.base_url = base_url.trim_end_matches('/').to_string();
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.pokeapi.base_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn test_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_POKEAPI_BASE_URL", "http://localhost:8000/api/v2/");
        }
        let config = Config::from_env();
        assert_eq!(config.pokeapi.base_url, "http://localhost:8000/api/v2");
        unsafe {
            std::env::remove_var("MCP_POKEAPI_BASE_URL");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "poke-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "poke-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
