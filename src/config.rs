use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub naver: NaverSettings,
    pub ncp: NcpSettings,
    pub google: GoogleSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub max_json_payload_size: usize,
}

/// Naver Open API credentials for the local-search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaverSettings {
    pub client_id: String,
    pub client_secret: String,
    pub search_url: String,
}

/// Naver Cloud Platform credentials for the geocoding endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NcpSettings {
    pub key_id: String,
    pub key: String,
    pub geocode_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleSettings {
    pub api_key: String,
    pub geocode_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                // One request at a time, like the browser-facing dev helper
                // this proxy replaces. Raise WORKERS for task-per-connection.
                workers: 1,
                max_json_payload_size: 65_536,
            },
            naver: NaverSettings {
                client_id: String::new(),
                client_secret: String::new(),
                search_url: "https://openapi.naver.com/v1/search/local.json".to_string(),
            },
            ncp: NcpSettings {
                key_id: String::new(),
                key: String::new(),
                geocode_url: "https://naveropenapi.apigw.ntruss.com/map-geocode/v2/geocode"
                    .to_string(),
            },
            google: GoogleSettings {
                api_key: String::new(),
                geocode_url: "https://maps.googleapis.com/maps/api/geocode/json".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Config::default();

        // Server configuration
        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(workers) = env::var("WORKERS") {
            config.server.workers = workers.parse()?;
        }
        if let Ok(max_json_payload_size) = env::var("MAX_JSON_PAYLOAD_SIZE") {
            config.server.max_json_payload_size = max_json_payload_size.parse()?;
        }

        // Naver Open API (local search)
        if let Ok(client_id) = env::var("NAVER_CLIENT_ID") {
            config.naver.client_id = client_id;
        }
        if let Ok(client_secret) = env::var("NAVER_CLIENT_SECRET") {
            config.naver.client_secret = client_secret;
        }
        if let Ok(search_url) = env::var("NAVER_SEARCH_URL") {
            config.naver.search_url = search_url;
        }

        // Naver Cloud Platform (geocoding)
        if let Ok(key_id) = env::var("NAVER_LOCAL_SEARCH_CLIENT_ID") {
            config.ncp.key_id = key_id;
        }
        if let Ok(key) = env::var("NAVER_LOCAL_SEARCH_CLIENT_SECRET") {
            config.ncp.key = key;
        }
        if let Ok(geocode_url) = env::var("NAVER_GEOCODE_URL") {
            config.ncp.geocode_url = geocode_url;
        }

        // Google Maps (geocoding)
        if let Ok(api_key) = env::var("GOOGLE_MAPS_API_KEY") {
            config.google.api_key = api_key;
        }
        if let Ok(geocode_url) = env::var("GOOGLE_GEOCODE_URL") {
            config.google.geocode_url = geocode_url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost_single_worker() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.workers, 1);
    }

    #[test]
    fn defaults_point_at_real_providers() {
        let config = Config::default();
        assert!(config.naver.search_url.starts_with("https://openapi.naver.com/"));
        assert!(config.ncp.geocode_url.contains("map-geocode"));
        assert!(config.google.geocode_url.contains("maps.googleapis.com"));
        // Credentials are never baked in.
        assert!(config.naver.client_id.is_empty());
        assert!(config.ncp.key.is_empty());
        assert!(config.google.api_key.is_empty());
    }
}
