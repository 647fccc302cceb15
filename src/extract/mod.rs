//! Client for the remote text-extraction endpoint.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::error::WorkflowError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

/// Server base URL, overridable via `EXTRACT_SERVER_URL`.
pub fn default_server_url() -> String {
    std::env::var("EXTRACT_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

/// Body of both success and error responses. The server sends exactly one
/// of the two fields; tolerating both keeps parsing a single pass.
#[derive(Debug, Default, Deserialize)]
pub struct ExtractResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct ExtractionClient {
    base_url: String,
    client: reqwest::Client,
}

impl ExtractionClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Posts the encoded image and maps every failure mode onto the fixed
    /// user-facing error taxonomy. Underlying causes go to the log only.
    pub async fn extract(&self, data_uri: &str) -> Result<String, WorkflowError> {
        let payload = json!({ "image": data_uri });
        let url = format!("{}/api/extract-text", self.base_url);

        tracing::debug!(%url, "sending extract request");

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        let body = match response.json::<ExtractResponse>().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, %status, "response body was not valid JSON");
                ExtractResponse::default()
            }
        };

        if !status.is_success() {
            tracing::warn!(%status, error = ?body.error, "server rejected extract request");
            return Err(server_error(body.error));
        }

        text_from_response(body)
    }
}

/// Request failures with no response received: a timeout gets its own
/// message, everything else is reported as a network problem.
fn classify_transport(err: reqwest::Error) -> WorkflowError {
    tracing::warn!(error = %err, "extract request failed before a response arrived");
    if err.is_timeout() {
        WorkflowError::Timeout
    } else {
        WorkflowError::Network
    }
}

/// Server-supplied error message when present, generic fallback otherwise.
pub fn server_error(message: Option<String>) -> WorkflowError {
    let message = message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Server error occurred".to_string());
    WorkflowError::Server(message)
}

/// A missing or empty `text` field on a 2xx response is a soft failure.
pub fn text_from_response(body: ExtractResponse) -> Result<String, WorkflowError> {
    match body.text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(WorkflowError::NoTextFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_is_returned_verbatim() {
        let body: ExtractResponse = serde_json::from_str(r#"{"text": "Hello"}"#).unwrap();
        assert_eq!(text_from_response(body).unwrap(), "Hello");
    }

    #[test]
    fn missing_or_empty_text_is_a_soft_failure() {
        let missing: ExtractResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(
            text_from_response(missing),
            Err(WorkflowError::NoTextFound)
        );

        let empty: ExtractResponse = serde_json::from_str(r#"{"text": ""}"#).unwrap();
        assert_eq!(text_from_response(empty), Err(WorkflowError::NoTextFound));
    }

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = server_error(Some("File size too large (max 5MB)".to_string()));
        assert_eq!(
            err.to_string(),
            "File size too large (max 5MB)"
        );
    }

    #[test]
    fn missing_server_message_falls_back_to_generic() {
        assert_eq!(server_error(None).to_string(), "Server error occurred");
        assert_eq!(
            server_error(Some(String::new())).to_string(),
            "Server error occurred"
        );
    }

    #[test]
    fn request_payload_uses_the_image_field() {
        let payload = json!({ "image": "data:image/png;base64,aGVsbG8=" });
        assert_eq!(
            payload.to_string(),
            r#"{"image":"data:image/png;base64,aGVsbG8="}"#
        );
    }
}
