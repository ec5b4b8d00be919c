//! Async HTTP client for the PokeAPI REST service.
//!
//! Each fetch issues exactly one GET, with no retries and no caching.
//! The public methods return `Option`: a 200 response with a decodable body
//! yields `Some(record)`, anything else yields `None`. Tools translate
//! `None` into a user-facing "no data" message.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::FetchError;
use super::models::{EvolutionChainRecord, PokemonRecord, SpeciesRecord};
use crate::core::config::PokeApiConfig;

/// Client for by-name and by-URL PokeAPI lookups.
///
/// Cheap to construct; tools build one per invocation so no state is shared
/// across tool calls.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from the PokeAPI configuration section.
    pub fn from_config(config: &PokeApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Fetch a Pokémon record by name.
    ///
    /// The name is lowercased before building the URL; PokeAPI identifiers
    /// are lowercase.
    pub async fn fetch_pokemon(&self, name: &str) -> Option<PokemonRecord> {
        let url = format!("{}/pokemon/{}", self.base_url, name.to_lowercase());
        self.fetch(&url).await
    }

    /// Fetch a species record from an absolute URL returned by a previous
    /// Pokémon lookup.
    pub async fn fetch_species(&self, url: &str) -> Option<SpeciesRecord> {
        self.fetch(url).await
    }

    /// Fetch an evolution chain record from an absolute URL returned by a
    /// previous species lookup.
    pub async fn fetch_evolution_chain(&self, url: &str) -> Option<EvolutionChainRecord> {
        self.fetch(url).await
    }

    /// One GET, collapsing every failure to `None`.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.get_json(url).await {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("{}", e);
                None
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::status(url, response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::decode(url, e))
    }
}
