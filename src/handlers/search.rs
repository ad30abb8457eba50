use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::error::ProxyError;
use crate::models::{SearchBody, SearchParams};
use crate::AppState;

use super::relay;

/// `GET /api/search/local`. Mirrors the upstream API surface, so
/// `display`, `start` and `sort` are all forwarded.
pub async fn local_search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse, ProxyError> {
    let query = params.query.as_deref().unwrap_or("");
    if query.is_empty() {
        return Err(ProxyError::QueryRequired);
    }

    info!("GET search request for: {}", query);
    let upstream = state
        .search_service
        .local_search(
            query,
            params.display,
            Some(params.start),
            Some(params.sort.as_str()),
        )
        .await?;
    Ok(relay(upstream))
}

/// `POST /search` with JSON body `{query, display}`. The body is parsed by
/// hand so a malformed document yields the fixed "Invalid JSON" envelope
/// instead of the framework's own error shape.
pub async fn search(
    state: web::Data<AppState>,
    payload: web::Bytes,
) -> Result<HttpResponse, ProxyError> {
    let body: SearchBody =
        serde_json::from_slice(&payload).map_err(|_| ProxyError::InvalidJson)?;
    if body.validate().is_err() {
        return Err(ProxyError::QueryRequired);
    }

    info!("Searching for: {}", body.query);
    let upstream = state
        .search_service
        .local_search(&body.query, body.display, None, None)
        .await?;
    Ok(relay(upstream))
}
