//! Request validation gate.
//!
//! Every analysis endpoint runs its body through [`parse_request`] before
//! any remote call is made. Malformed input is rejected here with a 400 so
//! no upstream network cost is ever incurred for it.

use crate::error::{GatewayError, Result};
use serde::Deserialize;
use url::Url;

/// Inbound analysis request body. Lives for one request/response cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Parse and validate a raw request body.
///
/// Fails when `imageUrl` is absent or empty, and when it is present but
/// not a syntactically valid absolute URL (scheme and host required). No
/// reachability or content-type check is performed. On success the image
/// URL is returned unchanged.
pub fn parse_request(body: &str) -> Result<String> {
    let req: AnalysisRequest = serde_json::from_str(body)
        .map_err(|e| GatewayError::Validation(format!("Invalid request body: {}", e)))?;

    let image_url = match req.image_url {
        Some(url) if !url.is_empty() => url,
        _ => {
            return Err(GatewayError::Validation(
                "imageUrl is missing or empty".to_string(),
            ))
        }
    };

    let parsed = Url::parse(&image_url)
        .map_err(|_| GatewayError::Validation(format!("imageUrl is malformed: {}", image_url)))?;
    if !parsed.has_host() {
        return Err(GatewayError::Validation(format!(
            "imageUrl is malformed: {}",
            image_url
        )));
    }

    Ok(image_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_absolute_url() {
        let url = parse_request(r#"{"imageUrl": "https://example.com/cat.jpg"}"#).unwrap();
        assert_eq!(url, "https://example.com/cat.jpg");
    }

    #[test]
    fn rejects_missing_field() {
        let err = parse_request(r#"{}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn rejects_empty_string() {
        let err = parse_request(r#"{"imageUrl": ""}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
    }

    #[test]
    fn rejects_plain_text() {
        let err = parse_request(r#"{"imageUrl": "not a url"}"#).unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = parse_request(r#"{"imageUrl": "://bad"}"#).unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
    }

    #[test]
    fn rejects_url_without_host() {
        let err = parse_request(r#"{"imageUrl": "file:///tmp/cat.jpg"}"#).unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn rejects_non_json_body() {
        let err = parse_request("imageUrl=x").unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
    }
}
