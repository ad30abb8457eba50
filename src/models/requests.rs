use serde::Deserialize;
use validator::Validate;

fn default_display() -> u32 {
    10
}

fn default_start() -> u32 {
    1
}

fn default_sort() -> String {
    "random".to_string()
}

/// Query-string parameters for `GET /api/search/local`. This route mirrors
/// the upstream API surface, so `start` and `sort` are accepted here but not
/// on the POST route.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    #[serde(default = "default_display")]
    pub display: u32,
    #[serde(default = "default_start")]
    pub start: u32,
    #[serde(default = "default_sort")]
    pub sort: String,
}

/// JSON body for `POST /search`. `start`/`sort` are left to provider
/// defaults on this route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchBody {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub query: String,
    #[serde(default = "default_display")]
    pub display: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GeocodeBody {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"query":"카페"}"#, 10)]
    #[case(r#"{"query":"카페","display":5}"#, 5)]
    fn search_body_display_defaults_to_ten(#[case] body: &str, #[case] expected: u32) {
        let parsed: SearchBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.display, expected);
    }

    #[rstest]
    #[case(r#"{}"#)]
    #[case(r#"{"query":""}"#)]
    #[case(r#"{"display":5}"#)]
    fn search_body_without_query_fails_validation(#[case] body: &str) {
        let parsed: SearchBody = serde_json::from_str(body).unwrap();
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn search_body_with_query_passes_validation() {
        let parsed: SearchBody = serde_json::from_str(r#"{"query":"강남 카페"}"#).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.query, "강남 카페");
    }

    #[test]
    fn search_params_apply_get_route_defaults() {
        let params: SearchParams = serde_json::from_str(r#"{"query":"카페"}"#).unwrap();
        assert_eq!(params.display, 10);
        assert_eq!(params.start, 1);
        assert_eq!(params.sort, "random");
    }
}
