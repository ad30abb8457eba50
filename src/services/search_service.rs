use bytes::Bytes;
use tracing::{debug, info};

use crate::config::NaverSettings;
use crate::error::ProxyError;

/// Raw upstream reply: relayed to the client as-is apart from header
/// augmentation at the transport boundary.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn from_json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: Bytes::from(body.to_string()),
        }
    }

    async fn capture(response: reqwest::Response) -> Result<Self, ProxyError> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;
        debug!(
            "Upstream replied {} ({} bytes, content type {:?})",
            status,
            body.len(),
            content_type
        );
        Ok(Self {
            status,
            content_type,
            body,
        })
    }
}

#[derive(Clone)]
pub struct SearchService {
    client: reqwest::Client,
    settings: NaverSettings,
}

impl SearchService {
    pub fn new(settings: NaverSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    /// One outbound GET to the Naver local-search endpoint. `start`/`sort`
    /// are only forwarded by the GET route; the POST route leaves them to
    /// provider defaults.
    pub async fn local_search(
        &self,
        query: &str,
        display: u32,
        start: Option<u32>,
        sort: Option<&str>,
    ) -> Result<UpstreamResponse, ProxyError> {
        let display = display.to_string();
        let mut request = self
            .client
            .get(&self.settings.search_url)
            .header("X-Naver-Client-Id", &self.settings.client_id)
            .header("X-Naver-Client-Secret", &self.settings.client_secret)
            .query(&[("query", query), ("display", display.as_str())]);

        if let Some(start) = start {
            let start = start.to_string();
            request = request.query(&[("start", start.as_str())]);
        }
        if let Some(sort) = sort {
            request = request.query(&[("sort", sort)]);
        }

        let response = request.send().await?;
        let upstream = UpstreamResponse::capture(response).await?;
        info!("Naver API response: {}", upstream.status);
        Ok(upstream)
    }
}
