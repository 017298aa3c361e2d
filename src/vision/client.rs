// Azure Computer Vision REST client

use crate::config::AzureConfig;
use crate::error::{GatewayError, Result};
use crate::utils::logging;
use crate::vision::features::{join_details, join_features, Detail, VisualFeature};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error};

const API_VERSION_PATH: &str = "vision/v3.2";

/// Client for the Azure Computer Vision REST API.
///
/// Built once at process start and shared read-only across all request
/// handlers. Holds a pooled reqwest client; every operation is a single
/// POST with the image URL in the JSON body and the subscription key in
/// the `Ocp-Apim-Subscription-Key` header.
pub struct VisionClient {
    http_client: Client,
    key: String,
    endpoint: String,
}

impl VisionClient {
    pub fn new(config: &AzureConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            key: config.key.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Composite `analyze` call requesting multiple feature categories at
    /// once, optionally with domain-specific detail flags.
    pub async fn analyze(
        &self,
        image_url: &str,
        features: &[VisualFeature],
        details: &[Detail],
    ) -> Result<Value> {
        let mut query = vec![("visualFeatures", join_features(features))];
        if !details.is_empty() {
            query.push(("details", join_details(details)));
        }
        self.post("analyze", &query, image_url).await
    }

    /// Dedicated object-detection operation.
    pub async fn detect_objects(&self, image_url: &str) -> Result<Value> {
        self.post("detect", &[], image_url).await
    }

    /// Dedicated description operation.
    pub async fn describe(&self, image_url: &str) -> Result<Value> {
        self.post("describe", &[], image_url).await
    }

    /// Dedicated printed-text OCR operation (non-handwriting mode).
    pub async fn recognize_printed_text(&self, image_url: &str) -> Result<Value> {
        let query = [("detectOrientation", "true".to_string())];
        self.post("ocr", &query, image_url).await
    }

    /// Issue one POST to the given operation path. Exactly one attempt; no
    /// retry, no timeout beyond the client transport default.
    async fn post(
        &self,
        operation: &str,
        query: &[(&str, String)],
        image_url: &str,
    ) -> Result<Value> {
        let url = format!("{}/{}/{}", self.endpoint, API_VERSION_PATH, operation);
        debug!("Calling vision operation {} for {}", operation, image_url);

        let response = self
            .http_client
            .post(&url)
            .query(query)
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .json(&json!({ "url": image_url }))
            .send()
            .await
            .map_err(|e| GatewayError::RemoteApi(format!("Vision service unreachable: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::RemoteApi(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            error!(
                "Vision API error: HTTP {} - {}",
                status,
                logging::redact_key(&body, &self.key)
            );
            let message = Self::extract_error_message(&body)
                .unwrap_or_else(|| format!("Vision service returned HTTP {}", status));
            return Err(GatewayError::RemoteApi(message));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse vision response: {}", e);
            GatewayError::RemoteApi(format!("Response parsing error: {}", e))
        })
    }

    /// Extract a human-readable message from an API error body. The
    /// service uses both `{"error": {"message": ...}}` and the flat
    /// `{"code": ..., "message": ...}` shape depending on the error class.
    fn extract_error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        if let Some(message) = value["error"]["message"].as_str() {
            return Some(message.to_string());
        }
        value["message"].as_str().map(|m| m.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_nested_error_message() {
        let body = r#"{"error": {"code": "InvalidImageUrl", "message": "Image URL is badly formed."}}"#;
        assert_eq!(
            VisionClient::extract_error_message(body).as_deref(),
            Some("Image URL is badly formed.")
        );
    }

    #[test]
    fn extracts_flat_error_message() {
        let body = r#"{"code": "401", "message": "Access denied"}"#;
        assert_eq!(
            VisionClient::extract_error_message(body).as_deref(),
            Some("Access denied")
        );
    }

    #[test]
    fn non_json_error_body_yields_none() {
        assert_eq!(VisionClient::extract_error_message("upstream exploded"), None);
    }
}
