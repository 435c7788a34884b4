//! Error taxonomy shared across the service.
//!
//! Every failure the orchestration layer can produce is one of these
//! variants; the HTTP boundary maps each variant to exactly one status
//! code and writes the `Display` text verbatim as the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while resolving a pokemon description.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller supplied an empty or missing name.
    #[error("Pokemon name must not be empty")]
    EmptyName,

    /// The data provider has no pokemon under this name.
    #[error("Pokemon doesn't exist")]
    UnknownPokemon,

    /// The pokemon exists but carries no English flavor text.
    #[error("No English description is available for this pokemon")]
    NoEnglishDescription,

    /// The data provider answered with a server error.
    #[error("Remote service error, please try later")]
    UpstreamUnavailable,

    /// The translation provider answered with a non-200 status.
    #[error("Translation service error, please try later")]
    TranslationUnavailable,

    /// Transport failure or a status neither side of the contract names.
    #[error("Unexpected upstream response: {0}")]
    Unexpected(String),
}

impl ServiceError {
    /// Status code the HTTP boundary answers with for this variant.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::EmptyName => StatusCode::BAD_REQUEST,
            ServiceError::UnknownPokemon | ServiceError::NoEnglishDescription => {
                StatusCode::NOT_FOUND
            }
            ServiceError::UpstreamUnavailable
            | ServiceError::TranslationUnavailable
            | ServiceError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Unexpected(err.to_string())
    }
}

/// Result type for orchestration and upstream operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
