use serde_json::json;
use tracing::{error, info};

use crate::config::{GoogleSettings, NcpSettings};
use crate::error::ProxyError;
use crate::services::UpstreamResponse;

#[derive(Clone)]
pub struct GeocodeService {
    client: reqwest::Client,
    ncp: NcpSettings,
    google: GoogleSettings,
}

impl GeocodeService {
    pub fn new(ncp: NcpSettings, google: GoogleSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            ncp,
            google,
        }
    }

    /// Address lookup against the Naver Cloud Platform geocoder. Unlike the
    /// search relay, a provider HTTP error is wrapped in an envelope that
    /// keeps the `addresses` array present for the client-side map code.
    pub async fn naver_geocode(&self, query: &str) -> Result<UpstreamResponse, ProxyError> {
        if self.ncp.key_id.is_empty() || self.ncp.key.is_empty() {
            return Err(ProxyError::CredentialsMissing);
        }

        let response = self
            .client
            .get(&self.ncp.geocode_url)
            .header("X-NCP-APIGW-API-KEY-ID", &self.ncp.key_id)
            .header("X-NCP-APIGW-API-KEY", &self.ncp.key)
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            error!("Naver geocoding API error: {}", status);
            return Ok(UpstreamResponse::from_json(
                status,
                json!({ "error": format!("Naver API error: {}", status), "addresses": [] }),
            ));
        }

        let body = response.bytes().await?;
        info!("Naver geocoding response: {}", status);
        Ok(UpstreamResponse {
            status,
            content_type: Some("application/json".to_string()),
            body,
        })
    }

    /// Address lookup against the Google Maps geocoder. Google reports
    /// failures both as HTTP errors and as a `status` field inside a 200
    /// document; the latter is mapped to a 400 so the client sees one error
    /// shape.
    pub async fn google_geocode(&self, query: &str) -> Result<UpstreamResponse, ProxyError> {
        if self.google.api_key.is_empty() {
            return Err(ProxyError::CredentialsMissing);
        }

        let response = self
            .client
            .get(&self.google.geocode_url)
            .query(&[
                ("address", query),
                ("key", self.google.api_key.as_str()),
                ("language", "ko"),
                ("region", "kr"),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            error!("Google geocoding API error: {}", status);
            return Ok(UpstreamResponse::from_json(
                status,
                json!({ "error": format!("Google API error: {}", status), "results": [] }),
            ));
        }

        let data: serde_json::Value = response.json().await?;
        let api_status = data.get("status").and_then(|s| s.as_str()).unwrap_or("");
        if api_status != "OK" && api_status != "ZERO_RESULTS" {
            error!("Google geocoding error: {}", api_status);
            return Ok(UpstreamResponse::from_json(
                400,
                json!({ "error": format!("Geocoding error: {}", api_status), "results": [] }),
            ));
        }

        info!(
            "Geocoding results: {} addresses",
            data.get("results").and_then(|r| r.as_array()).map_or(0, |r| r.len())
        );
        Ok(UpstreamResponse::from_json(status, data))
    }
}
