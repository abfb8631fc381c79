use crate::api::ToolCallRequest;
use crate::config::{Config, REQUEST_TIMEOUT_SECS};
use crate::error::{RagChatError, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Sends questions to the RAG tool-call endpoint.
pub struct RagClient<'a> {
    config: &'a Config,
    endpoint: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl<'a> RagClient<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Self::with_timeout(config, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(config: &'a Config, timeout: Duration) -> Result<Self> {
        let endpoint = config.endpoint();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| RagChatError::from_reqwest(e, &endpoint, timeout.as_secs()))?;

        Ok(Self {
            config,
            endpoint,
            timeout,
            http,
        })
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn build_request(&self, query: &str, session_override: Option<&str>) -> ToolCallRequest {
        ToolCallRequest::new(
            self.config.tool_name.as_str(),
            query,
            self.config.include_sources,
            session_override.unwrap_or(self.config.session_id.as_str()),
        )
    }

    /// Ask one question. Transport failures, non-2xx statuses and non-JSON
    /// bodies all come back as `Err`; the body of a successful call is
    /// returned untouched.
    pub async fn ask(&self, query: &str, session_override: Option<&str>) -> Result<Value> {
        let request = self.build_request(query, session_override);
        debug!(
            endpoint = %self.endpoint,
            tool = %request.tool_name,
            session_id = %request.session_id,
            "sending question"
        );

        let result = self.send(&request).await;
        if let Err(e) = &result {
            debug!(error = %e, "RAG request failed");
        }
        result
    }

    async fn send(&self, request: &ToolCallRequest) -> Result<Value> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        debug!(status = %response.status(), "response received");

        let response = response
            .error_for_status()
            .map_err(|e| self.classify_error(e))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| self.classify_error(e))
    }

    fn classify_error(&self, err: reqwest::Error) -> RagChatError {
        RagChatError::from_reqwest(err, &self.endpoint, self.timeout.as_secs())
    }
}
