//! Core logic for resolving a pokemon name to a translated description.
//!
//! The engine owns both caches and both upstream seams. Its job is to turn
//! two unreliable, rate-limited upstream calls into a memoized, idempotent
//! local operation: per name the description fetch happens once, per
//! selected text the translation happens once, and failures never populate
//! a cache entry.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::cache::SingleFlightCache;
use crate::error::{ServiceError, ServiceResult};
use crate::service::selector::CandidateSelector;
use crate::upstream::{PokeApiClient, ShakespeareClient};

/// Where candidate descriptions come from.
pub trait DescriptionSource: Send + Sync {
    fn fetch_descriptions(
        &self,
        name: &str,
    ) -> impl Future<Output = ServiceResult<Vec<String>>> + Send;
}

impl DescriptionSource for PokeApiClient {
    fn fetch_descriptions(
        &self,
        name: &str,
    ) -> impl Future<Output = ServiceResult<Vec<String>>> + Send {
        PokeApiClient::fetch_descriptions(self, name)
    }
}

/// Where translations come from.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> impl Future<Output = ServiceResult<String>> + Send;
}

impl Translator for ShakespeareClient {
    fn translate(&self, text: &str) -> impl Future<Output = ServiceResult<String>> + Send {
        ShakespeareClient::translate(self, text)
    }
}

/// A resolved pokemon: the caller's name paired with one translated
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub description: String,
}

/// Memoizing orchestrator over the data and translation providers.
pub struct DescriptionService<D, T> {
    descriptions: D,
    translator: T,
    selector: Box<dyn CandidateSelector>,
    description_cache: SingleFlightCache<Vec<String>>,
    translation_cache: SingleFlightCache<String>,
}

impl<D: DescriptionSource, T: Translator> DescriptionService<D, T> {
    pub fn new(descriptions: D, translator: T, selector: Box<dyn CandidateSelector>) -> Self {
        Self {
            descriptions,
            translator,
            selector,
            description_cache: SingleFlightCache::new("descriptions"),
            translation_cache: SingleFlightCache::new("translations"),
        }
    }

    /// Resolve `name` to a translated description.
    ///
    /// The description set for a name is fetched upstream at most once and
    /// memoized; the candidate picked from it may differ between calls.
    /// Each distinct candidate text is translated at most once.
    pub async fn resolve(&self, name: &str) -> ServiceResult<Pokemon> {
        if name.is_empty() {
            return Err(ServiceError::EmptyName);
        }

        let descriptions = self
            .description_cache
            .get_or_fetch(name, || self.descriptions.fetch_descriptions(name))
            .await?;

        if descriptions.is_empty() {
            return Err(ServiceError::NoEnglishDescription);
        }

        let picked = descriptions[self.selector.pick(descriptions.len())].clone();
        tracing::debug!(name = %name, "Selected candidate description");

        let description = self
            .translation_cache
            .get_or_fetch(&picked, || self.translator.translate(&picked))
            .await?;

        Ok(Pokemon {
            name: name.to_string(),
            description,
        })
    }
}

impl<D, T> std::fmt::Debug for DescriptionService<D, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptionService")
            .field("description_cache", &self.description_cache)
            .field("translation_cache", &self.translation_cache)
            .finish()
    }
}
