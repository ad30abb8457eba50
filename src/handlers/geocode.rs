use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::error::ProxyError;
use crate::models::GeocodeBody;
use crate::AppState;

use super::relay;

fn parse_geocode_body(payload: &web::Bytes) -> Result<GeocodeBody, ProxyError> {
    let body: GeocodeBody =
        serde_json::from_slice(payload).map_err(|_| ProxyError::InvalidJson)?;
    if body.validate().is_err() {
        return Err(ProxyError::QueryRequired);
    }
    Ok(body)
}

/// `POST /api/geocode`. Address lookup via the Naver Cloud Platform
/// geocoder.
pub async fn naver_geocode(
    state: web::Data<AppState>,
    payload: web::Bytes,
) -> Result<HttpResponse, ProxyError> {
    let body = parse_geocode_body(&payload)?;

    info!("Geocoding address: {}", body.query);
    let upstream = state.geocode_service.naver_geocode(&body.query).await?;
    Ok(relay(upstream))
}

/// `POST /api/geocode/google`. Fallback lookup via the Google Maps
/// geocoder.
pub async fn google_geocode(
    state: web::Data<AppState>,
    payload: web::Bytes,
) -> Result<HttpResponse, ProxyError> {
    let body = parse_geocode_body(&payload)?;

    info!("Geocoding address (Google): {}", body.query);
    let upstream = state.geocode_service.google_geocode(&body.query).await?;
    Ok(relay(upstream))
}
