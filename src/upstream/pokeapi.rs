//! PokeAPI client: resolves a pokemon name to its English flavor texts.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{ServiceError, ServiceResult};
use crate::observability::metrics;

/// Fields consumed from `GET {pokemon_resource}/{name}`.
#[derive(Debug, Deserialize)]
struct PokemonInfo {
    species: SpeciesRef,
}

#[derive(Debug, Deserialize)]
struct SpeciesRef {
    url: String,
}

/// Fields consumed from the species resource.
#[derive(Debug, Deserialize)]
struct Species {
    flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Deserialize)]
struct FlavorTextEntry {
    flavor_text: String,
    language: Language,
}

#[derive(Debug, Deserialize)]
struct Language {
    name: String,
}

/// Client for the pokemon data provider.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client rooted at `base_url` (no trailing slash).
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Fetch the English flavor texts for `name`, in source order.
    ///
    /// An empty list is a valid outcome: the pokemon exists but carries no
    /// English entries. Absence of the pokemon itself is `UnknownPokemon`.
    pub async fn fetch_descriptions(&self, name: &str) -> ServiceResult<Vec<String>> {
        let url = format!("{}/{}", self.base_url, name);
        tracing::debug!(name = %name, url = %url, "Fetching pokemon info");
        metrics::record_upstream_call("pokeapi");

        let response = self.client.get(&url).send().await?;
        let info: PokemonInfo = match response.status() {
            StatusCode::OK => response.json().await?,
            StatusCode::NOT_FOUND => return Err(ServiceError::UnknownPokemon),
            StatusCode::INTERNAL_SERVER_ERROR => return Err(ServiceError::UpstreamUnavailable),
            status => {
                return Err(ServiceError::Unexpected(format!(
                    "pokemon lookup returned status {status}"
                )))
            }
        };

        // The species URL comes from the provider itself and is trusted.
        tracing::debug!(name = %name, species_url = %info.species.url, "Fetching species");
        metrics::record_upstream_call("pokeapi");
        let species: Species = self
            .client
            .get(&info.species.url)
            .send()
            .await?
            .json()
            .await?;

        let descriptions: Vec<String> = species
            .flavor_text_entries
            .into_iter()
            .filter(|entry| entry.language.name == "en")
            .map(|entry| entry.flavor_text)
            .collect();

        tracing::debug!(
            name = %name,
            count = descriptions.len(),
            "Fetched English flavor texts"
        );
        Ok(descriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = PokeApiClient::new(reqwest::Client::new(), "http://localhost:9001/api/");
        assert_eq!(client.base_url, "http://localhost:9001/api");
    }

    #[test]
    fn test_species_body_filtering() {
        let body = serde_json::json!({
            "flavor_text_entries": [
                {"flavor_text": "Spits fire.", "language": {"name": "en"}},
                {"flavor_text": "Speit Feuer.", "language": {"name": "de"}},
                {"flavor_text": "Flies high.", "language": {"name": "en"}},
            ]
        });
        let species: Species = serde_json::from_value(body).unwrap();
        let english: Vec<String> = species
            .flavor_text_entries
            .into_iter()
            .filter(|entry| entry.language.name == "en")
            .map(|entry| entry.flavor_text)
            .collect();
        assert_eq!(english, vec!["Spits fire.", "Flies high."]);
    }

    #[test]
    fn test_species_url_extraction() {
        let body = serde_json::json!({
            "name": "charizard",
            "species": {"name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon-species/6/"},
            "weight": 905
        });
        let info: PokemonInfo = serde_json::from_value(body).unwrap();
        assert_eq!(info.species.url, "https://pokeapi.co/api/v2/pokemon-species/6/");
    }
}
