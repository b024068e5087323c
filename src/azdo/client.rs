//! Azure DevOps HTTP client for API interactions

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{AzdoError, Result};

/// Longest error body excerpt carried into an error message
const MAX_ERROR_BODY_CHARS: usize = 200;

const AUTH_FAILED_MESSAGE: &str =
    "authentication failed, check the personal access token (-pat or AZDO_PAT)";

/// Azure DevOps API client
pub struct AzdoClient {
    client: Client,
    token: String,
    base_url: String,
}

impl AzdoClient {
    /// Create a new client against `base_url` with a total request timeout
    pub fn new(token: String, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()
            .map_err(|e| AzdoError::Request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Service root all request URLs are built from
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder with standard headers
    ///
    /// The token only ever travels in the Authorization header.
    pub(crate) fn get(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        let url = Url::parse(url)
            .map_err(|e| AzdoError::Request(format!("invalid URL '{}': {}", url, e)))?;

        let mut auth = HeaderValue::from_str(&basic_auth_value(&self.token))
            .map_err(|e| AzdoError::Request(format!("invalid Authorization header: {}", e)))?;
        auth.set_sensitive(true);

        Ok(self
            .client
            .get(url)
            .header(AUTHORIZATION, auth)
            .header(ACCEPT, "application/json"))
    }

    /// Check the status, read the whole body and decode it as JSON
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        debug!("Response status for {}: {}", error_context, status);

        // A rejected PAT gets a 203 with the sign-in page instead of a 401
        if status == StatusCode::NON_AUTHORITATIVE_INFORMATION || status == StatusCode::UNAUTHORIZED
        {
            return Err(AzdoError::Api {
                status: status.as_u16(),
                message: AUTH_FAILED_MESSAGE.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AzdoError::Api {
                status: status.as_u16(),
                message: format!(
                    "Failed to fetch {}: {}",
                    error_context,
                    error_body_message(&body)
                ),
            });
        }

        let body = response.text().await?;
        debug!("Read {} bytes for {}", body.len(), error_context);

        serde_json::from_str(&body)
            .map_err(|e| AzdoError::Json(format!("Failed to parse {}: {}", error_context, e)))
    }
}

/// `Basic base64(":" + token)` - empty user name, token as password
pub fn basic_auth_value(token: &str) -> String {
    format!("Basic {}", BASE64.encode(format!(":{}", token)))
}

/// Pull a readable message out of an error response body.
///
/// Azure DevOps error bodies are JSON objects with a `message` field; anything
/// else is trimmed and truncated.
fn error_body_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    if trimmed.chars().count() > MAX_ERROR_BODY_CHARS {
        let excerpt: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", excerpt)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
impl AzdoClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-pat".to_string(), base_url, Duration::from_secs(5))
            .expect("test client should build")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_value_uses_empty_user() {
        assert_eq!(basic_auth_value("test-pat"), "Basic OnRlc3QtcGF0");
        assert_eq!(basic_auth_value("my-secret-pat"), "Basic Om15LXNlY3JldC1wYXQ=");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AzdoClient::test_client("https://dev.azure.com/");
        assert_eq!(client.base_url(), "https://dev.azure.com");
    }

    #[test]
    fn test_get_rejects_invalid_url() {
        let client = AzdoClient::test_client("https://dev.azure.com");
        match client.get("not a url") {
            Err(AzdoError::Request(msg)) => assert!(msg.contains("not a url")),
            Err(other) => panic!("Expected AzdoError::Request, got {:?}", other),
            Ok(_) => panic!("Expected AzdoError::Request"),
        }
    }

    #[test]
    fn test_get_marks_authorization_sensitive() {
        let client = AzdoClient::test_client("https://dev.azure.com");
        let request = client
            .get("https://dev.azure.com/org/prj")
            .unwrap()
            .build()
            .unwrap();
        let auth = request.headers().get(AUTHORIZATION).unwrap();
        assert!(auth.is_sensitive());
        assert_eq!(auth, "Basic OnRlc3QtcGF0");
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_error_body_message_json() {
        let body = r#"{"$id":"1","message":"TF200016: The project does not exist.","typeKey":"ProjectDoesNotExistException"}"#;
        assert_eq!(
            error_body_message(body),
            "TF200016: The project does not exist."
        );
    }

    #[test]
    fn test_error_body_message_plain_and_empty() {
        assert_eq!(error_body_message("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_body_message(""), "empty response body");
    }

    #[test]
    fn test_error_body_message_truncated() {
        let body = "x".repeat(500);
        let msg = error_body_message(&body);
        assert!(msg.ends_with("..."));
        assert_eq!(msg.len(), MAX_ERROR_BODY_CHARS + 3);
    }
}
