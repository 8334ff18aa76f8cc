//! Backend HTTP client
//!
//! Thin reqwest wrapper around the three public endpoints. The base URL
//! comes from the `MEU_BEBE_API_URL` environment variable and falls back
//! to the local development backend.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;

use super::model::{ErrorBody, InterestPayload, StatsResponse, SurveyPayload};

/// Local development backend, used when no environment override is set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5500/api/v1";

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "MEU_BEBE_API_URL";

const TIMEOUT_SECS: u64 = 15;

/// How a backend call failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success status. Carries the
    /// `message` field of the error body when one was present.
    Rejected(Option<String>),
    /// The backend could not be reached or the response was unreadable
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected(Some(message)) => write!(f, "rejected: {}", message),
            ApiError::Rejected(None) => write!(f, "rejected without a message"),
            ApiError::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApiClient {
    /// Build a client against the base URL from the environment, or the
    /// local development default when the variable is unset or unusable.
    pub fn from_env() -> Self {
        let base_url = match std::env::var(BASE_URL_ENV) {
            Err(_) => DEFAULT_BASE_URL.to_string(),
            Ok(raw) => match validate_base_url(&raw) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(
                        "ignoring {}={:?}: {:#}, using {}",
                        BASE_URL_ENV,
                        raw,
                        e,
                        DEFAULT_BASE_URL
                    );
                    DEFAULT_BASE_URL.to_string()
                }
            },
        };
        Self::with_base_url(base_url)
    }

    /// Build a client against an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(concat!("meu-bebe-e-eu/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one questionnaire response
    pub async fn submit_survey(&self, payload: &SurveyPayload) -> Result<(), ApiError> {
        self.post_json("/questionarios", payload).await
    }

    /// Register one interest manifestation
    pub async fn submit_interest(&self, payload: &InterestPayload) -> Result<(), ApiError> {
        self.post_json("/questionarios/email/interece", payload).await
    }

    /// Fetch the aggregated questionnaire statistics
    pub async fn fetch_stats(&self) -> Result<StatsResponse, ApiError> {
        let url = format!("{}/questionarios/stats", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ApiError::Rejected(read_error_message(response).await));
        }
        response
            .json::<StatsResponse>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(ApiError::Rejected(read_error_message(response).await))
    }
}

/// Pull the `message` field out of a rejection body, if it parses at all
async fn read_error_message(response: reqwest::Response) -> Option<String> {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
}

fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("value is empty");
    }
    let url: reqwest::Url = trimmed.parse().context("not a valid URL")?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("unsupported scheme '{}'", url.scheme());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:5500/api/v1///");
        assert_eq!(client.base_url(), "http://localhost:5500/api/v1");
    }

    #[test]
    fn rejects_unusable_overrides() {
        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("   ").is_err());
        assert!(validate_base_url("ftp://example.com/api").is_err());
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(
            validate_base_url("https://api.meubebeeeu.ao/v1").unwrap(),
            "https://api.meubebeeeu.ao/v1"
        );
        assert_eq!(
            validate_base_url(" http://10.0.0.2:5500/api/v1 ").unwrap(),
            "http://10.0.0.2:5500/api/v1"
        );
    }

    #[test]
    fn error_display_carries_the_server_message() {
        let e = ApiError::Rejected(Some("Dados inválidos".to_string()));
        assert_eq!(e.to_string(), "rejected: Dados inválidos");
        let e = ApiError::Transport("timeout".to_string());
        assert_eq!(e.to_string(), "transport error: timeout");
    }
}
