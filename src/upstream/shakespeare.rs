//! FunTranslations client: rewrites a text in Shakespearean English.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};
use crate::observability::metrics;

#[derive(Debug, Serialize)]
struct TranslationRequest<'a> {
    text: &'a str,
}

/// Fields consumed from the translation response.
#[derive(Debug, Deserialize)]
struct TranslationResponse {
    contents: Contents,
}

#[derive(Debug, Deserialize)]
struct Contents {
    translated: String,
}

/// Client for the translation provider.
#[derive(Debug, Clone)]
pub struct ShakespeareClient {
    client: reqwest::Client,
    url: String,
}

impl ShakespeareClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Translate `text`. Any non-200 answer, including the provider's
    /// rate-limit responses, surfaces as `TranslationUnavailable`.
    pub async fn translate(&self, text: &str) -> ServiceResult<String> {
        tracing::debug!(url = %self.url, "Requesting translation");
        metrics::record_upstream_call("funtranslations");

        let response = self
            .client
            .post(&self.url)
            .json(&TranslationRequest { text })
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Translation request failed");
                ServiceError::TranslationUnavailable
            })?;

        if response.status() != StatusCode::OK {
            tracing::warn!(status = %response.status(), "Translation provider returned non-200");
            return Err(ServiceError::TranslationUnavailable);
        }

        let body: TranslationResponse = response.json().await?;
        Ok(body.contents.translated)
    }
}
