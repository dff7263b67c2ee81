use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::retry::{RetryExecutor, RetryPolicy};
use crate::domain::errors::{UpstreamCause, UpstreamError};
use crate::domain::models::LegacyApiConfig;
use crate::domain::ports::{Clock, UpstreamClient};

/// HTTP client for the legacy API
///
/// Every request runs inside the retry executor, and every failure
/// (transport, timeout, non-2xx, unparseable body) comes back as an
/// [`UpstreamError`]. Successful bodies are returned as raw JSON.
pub struct LegacyHttpClient {
    http_client: ReqwestClient,
    base_url: String,
    retry: RetryExecutor,
    policy: RetryPolicy,
}

impl LegacyHttpClient {
    /// Create a new legacy API client
    ///
    /// # Arguments
    /// * `config` - Base URL, optional API key and per-attempt timeout
    /// * `policy` - Retry policy applied to every read
    /// * `clock` - Clock used for inter-attempt delays
    pub fn new(
        config: &LegacyApiConfig,
        policy: RetryPolicy,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        info!(
            base_url = %config.base_url,
            timeout_ms = config.timeout_ms,
            max_attempts = policy.max_attempts(),
            api_key = %redact(&config.api_key),
            "initializing legacy API client"
        );

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        if !config.api_key.is_empty() {
            headers.insert(
                "x-api-key",
                header::HeaderValue::from_str(&config.api_key).context("Invalid legacy API key")?,
            );
        }

        let http_client = ReqwestClient::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: RetryExecutor::new(clock),
            policy,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A single GET, no retries.
    async fn request_once(&self, endpoint: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|err| UpstreamError::new(endpoint, classify_send_error(err)))?;

        handle_response(endpoint, response).await
    }
}

async fn handle_response(endpoint: &str, response: Response) -> Result<Value, UpstreamError> {
    let status = response.status();
    debug!(%status, endpoint, "legacy API responded");

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        return Err(UpstreamError::new(
            endpoint,
            UpstreamCause::Status {
                status: status.as_u16(),
                body,
            },
        ));
    }

    response.json::<Value>().await.map_err(|err| {
        let cause = if err.is_timeout() {
            UpstreamCause::Timeout(Box::new(err))
        } else {
            UpstreamCause::Decode(Box::new(err))
        };
        UpstreamError::new(endpoint, cause)
    })
}

fn classify_send_error(err: reqwest::Error) -> UpstreamCause {
    if err.is_timeout() {
        UpstreamCause::Timeout(Box::new(err))
    } else {
        UpstreamCause::Transport(Box::new(err))
    }
}

fn redact(api_key: &str) -> String {
    match api_key.len() {
        0 => "<none>".to_string(),
        1..=8 => "[REDACTED]".to_string(),
        _ => format!(
            "{}...[REDACTED]",
            api_key.chars().take(4).collect::<String>()
        ),
    }
}

#[async_trait]
impl UpstreamClient for LegacyHttpClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_resource(&self, endpoint: &str) -> Result<Value, UpstreamError> {
        self.retry
            .execute(&self.policy, || self.request_once(endpoint))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemClock;

    #[test]
    fn test_client_creation() {
        let client = LegacyHttpClient::new(
            &LegacyApiConfig::default(),
            RetryPolicy::default(),
            Arc::new(SystemClock),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = LegacyApiConfig {
            base_url: "https://jsonplaceholder.typicode.com/".to_string(),
            ..Default::default()
        };
        let client =
            LegacyHttpClient::new(&config, RetryPolicy::default(), Arc::new(SystemClock)).unwrap();
        assert_eq!(client.base_url(), "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let config = LegacyApiConfig {
            api_key: "bad\nkey".to_string(),
            ..Default::default()
        };
        let client = LegacyHttpClient::new(&config, RetryPolicy::default(), Arc::new(SystemClock));
        assert!(client.is_err());
    }

    #[test]
    fn test_api_key_redaction() {
        assert_eq!(redact(""), "<none>");
        assert_eq!(redact("short"), "[REDACTED]");
        assert_eq!(redact("sk-legacy-1234567890"), "sk-l...[REDACTED]");
    }
}
