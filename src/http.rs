//! HTTP client for the DEV article API.
//!
//! Sends exactly one request per call: no retry, no backoff. A request timeout
//! is applied only when one is configured.

use crate::article::ArticleRequest;
use crate::config::Config;
use crate::error::{PublishError, Result};
use crate::traits::PublishEndpoint;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api-key";

/// Media type selecting version 1 of the Forem API.
pub const FOREM_API_V1: &str = "application/vnd.forem.api-v1+json";

/// Status code and decoded body of an endpoint response.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointResponse {
    pub status: u16,
    /// Decoded JSON body, `None` if the body was empty or not JSON
    pub payload: Option<Value>,
}

impl EndpointResponse {
    /// Whether the endpoint created the article.
    pub fn is_created(&self) -> bool {
        self.status == StatusCode::CREATED.as_u16()
    }
}

/// HTTP client wrapper for the DEV article endpoint.
#[derive(Debug, Clone)]
pub struct DevToHttpClient {
    client: Client,
    endpoint: String,
}

impl DevToHttpClient {
    /// Creates a client for the default endpoint.
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.http.user_agent);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            PublishError::config_error(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: config.http.endpoint.clone(),
        })
    }

    /// URL the client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts the article and decodes whatever the endpoint answers.
    pub async fn post_article(
        &self,
        api_key: &str,
        request: &ArticleRequest,
    ) -> Result<EndpointResponse> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, FOREM_API_V1)
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        // The status alone decides the outcome, so a lost body only costs the payload
        let payload = match response.bytes().await {
            Ok(bytes) => {
                let payload = decode_payload(&bytes);
                if payload.is_none() && !bytes.is_empty() {
                    warn!("Response body with status {status} is not JSON ({} bytes)", bytes.len());
                }
                payload
            }
            Err(e) => {
                warn!("Failed to read response body with status {status}: {e}");
                None
            }
        };

        debug!("Endpoint answered with status {status}");
        Ok(EndpointResponse { status, payload })
    }
}

#[async_trait::async_trait]
impl PublishEndpoint for DevToHttpClient {
    async fn create_article(
        &self,
        api_key: &str,
        request: &ArticleRequest,
    ) -> Result<EndpointResponse> {
        self.post_article(api_key, request).await
    }
}

fn decode_payload(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    serde_json::from_slice(bytes).ok()
}
