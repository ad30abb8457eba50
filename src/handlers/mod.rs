pub mod geocode;
pub mod health;
pub mod search;

pub use geocode::*;
pub use health::*;
pub use search::*;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::services::UpstreamResponse;

/// Transport boundary for the relay: upstream status and body verbatim,
/// content type pinned to JSON. CORS headers come from the middleware.
pub(crate) fn relay(upstream: UpstreamResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("application/json; charset=utf-8")
        .body(upstream.body)
}
