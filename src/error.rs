use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Outcome of the request pipeline. Client-input failures carry a fixed
/// message the browser-side code matches on, so the wording is part of the
/// wire contract.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Query is required")]
    QueryRequired,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("API credentials not configured")]
    CredentialsMissing,

    /// Transport-level failure talking to the upstream provider. Provider
    /// HTTP errors are not in this enum: those are relayed verbatim.
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::QueryRequired | ProxyError::InvalidJson => StatusCode::BAD_REQUEST,
            ProxyError::CredentialsMissing | ProxyError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(ProxyError::QueryRequired.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ProxyError::InvalidJson.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_messages_match_wire_contract() {
        assert_eq!(ProxyError::QueryRequired.to_string(), "Query is required");
        assert_eq!(ProxyError::InvalidJson.to_string(), "Invalid JSON");
    }
}
