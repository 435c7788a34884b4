//! Inbound request handlers.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ServiceError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /pokemon/{name}` — resolve a name to a translated description.
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let start = Instant::now();

    match state.service.resolve(&name).await {
        Ok(pokemon) => {
            metrics::record_request(200, start);
            tracing::info!(name = %name, status = 200, "Resolved description");
            (StatusCode::OK, Json(pokemon)).into_response()
        }
        Err(err) => {
            let status = err.status_code();
            metrics::record_request(status.as_u16(), start);
            tracing::warn!(name = %name, status = %status, error = %err, "Resolve failed");
            err.into_response()
        }
    }
}

/// `GET /pokemon` — the name segment is missing entirely.
pub async fn missing_name() -> Response {
    metrics::record_request(400, Instant::now());
    ServiceError::EmptyName.into_response()
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
