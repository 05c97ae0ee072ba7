//! The publish operation.
//!
//! [`Publisher::publish`] runs one forward pass: resolve the API key, read the
//! content, build the request, send it, interpret the status. Each step can end
//! the pass early with its own [`PublishError`]; none of them panic or escape as
//! `Err`. The outcome is handed to the configured [`ReportSink`] and returned.

use crate::article::{ArticleRequest, PublishOptions};
use crate::config::Config;
use crate::content::FsContentSource;
use crate::credentials::EnvCredentials;
use crate::error::{ErrorKind, PublishError, Result};
use crate::http::{DevToHttpClient, EndpointResponse};
use crate::report::ConsoleSink;
use crate::traits::{ContentSource, CredentialProvider, PublishEndpoint, ReportSink};
use reqwest::header::HeaderValue;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of one publish.
#[derive(Debug)]
pub struct PublishResult {
    pub success: bool,
    /// Response status, if a response was received
    pub status_code: Option<u16>,
    /// Decoded response body, if a response was received and was JSON
    pub payload: Option<Value>,
    /// Why the publish failed
    pub error: Option<PublishError>,
}

impl PublishResult {
    pub(crate) fn created(response: EndpointResponse) -> Self {
        Self {
            success: true,
            status_code: Some(response.status),
            payload: response.payload,
            error: None,
        }
    }

    pub(crate) fn failed(error: PublishError) -> Self {
        let (status_code, payload) = match &error {
            PublishError::RemoteRejected { status, payload } => (Some(*status), payload.clone()),
            _ => (None, None),
        };

        Self {
            success: false,
            status_code,
            payload,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Failure kind, `None` on success.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(PublishError::kind)
    }

    /// Human readable summary of the outcome.
    pub fn message(&self) -> String {
        match &self.error {
            None => "Article published successfully!".to_string(),
            Some(error) => error.to_string(),
        }
    }
}

/// Publishes markdown articles to DEV.
#[derive(Clone)]
pub struct Publisher {
    credentials: Arc<dyn CredentialProvider>,
    content: Arc<dyn ContentSource>,
    endpoint: Arc<dyn PublishEndpoint>,
    sink: Arc<dyn ReportSink>,
}

impl Publisher {
    /// Creates a publisher reading the API key from the environment, content
    /// from the filesystem, and reporting to the console.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            credentials: Arc::new(EnvCredentials::from_config(&config.credential)),
            content: Arc::new(FsContentSource::new()),
            endpoint: Arc::new(DevToHttpClient::with_config(&config)?),
            sink: Arc::new(ConsoleSink),
        })
    }

    /// Creates a publisher from [`Config::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn with_credentials(mut self, credentials: impl CredentialProvider + 'static) -> Self {
        self.credentials = Arc::new(credentials);
        self
    }

    pub fn with_content_source(mut self, content: impl ContentSource + 'static) -> Self {
        self.content = Arc::new(content);
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl PublishEndpoint + 'static) -> Self {
        self.endpoint = Arc::new(endpoint);
        self
    }

    pub fn with_sink(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Publishes the content behind `content_ref` as one article.
    ///
    /// At most one request is made, and none when the API key or the content
    /// is unavailable.
    pub async fn publish(
        &self,
        content_ref: &str,
        title: &str,
        options: PublishOptions,
    ) -> PublishResult {
        let result = match self.try_publish(content_ref, title, options).await {
            Ok(response) => PublishResult::created(response),
            Err(error) => PublishResult::failed(error),
        };

        self.sink.report(&result);
        result
    }

    async fn try_publish(
        &self,
        content_ref: &str,
        title: &str,
        options: PublishOptions,
    ) -> Result<EndpointResponse> {
        let api_key = self
            .credentials
            .api_key()
            .ok_or_else(|| PublishError::CredentialMissing {
                name: self.credentials.name().to_string(),
            })?;
        if HeaderValue::from_str(&api_key).is_err() {
            return Err(PublishError::CredentialInvalid {
                name: self.credentials.name().to_string(),
            });
        }
        debug!("Resolved API key from {}", self.credentials.name());

        let body = self.content.read(content_ref).await?;
        debug!("Loaded {} bytes of content from {content_ref}", body.len());

        let request = ArticleRequest::new(title, body, options);
        info!(
            "Publishing \"{}\" ({} tags, published: {})",
            request.article.title,
            request.article.tags.len(),
            request.article.published
        );

        let response = self.endpoint.create_article(&api_key, &request).await?;
        if response.is_created() {
            Ok(response)
        } else {
            Err(PublishError::rejected(response.status, response.payload))
        }
    }
}

impl std::fmt::Debug for Publisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("credentials", &self.credentials.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryContentSource;
    use crate::credentials::StaticCredentials;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Endpoint double recording every request and answering with a fixed response.
    #[derive(Clone)]
    struct RecordingEndpoint {
        calls: Arc<Mutex<Vec<(String, ArticleRequest)>>>,
        response: EndpointResponse,
    }

    impl RecordingEndpoint {
        fn answering(status: u16, payload: Option<Value>) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                response: EndpointResponse { status, payload },
            }
        }

        fn calls(&self) -> Vec<(String, ArticleRequest)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PublishEndpoint for RecordingEndpoint {
        async fn create_article(
            &self,
            api_key: &str,
            request: &ArticleRequest,
        ) -> Result<EndpointResponse> {
            self.calls
                .lock()
                .unwrap()
                .push((api_key.to_string(), request.clone()));
            Ok(self.response.clone())
        }
    }

    #[derive(Clone, Default)]
    struct CollectingSink {
        messages: Arc<Mutex<Vec<(bool, String)>>>,
    }

    impl ReportSink for CollectingSink {
        fn report(&self, result: &PublishResult) {
            self.messages
                .lock()
                .unwrap()
                .push((result.success, result.message()));
        }
    }

    fn publisher(
        credentials: StaticCredentials,
        endpoint: &RecordingEndpoint,
        sink: &CollectingSink,
    ) -> Publisher {
        Publisher::new(Config::default())
            .unwrap()
            .with_credentials(credentials)
            .with_content_source(MemoryContentSource::new().with("post.md", "# Hello\nWorld"))
            .with_endpoint(endpoint.clone())
            .with_sink(sink.clone())
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_request() {
        let endpoint = RecordingEndpoint::answering(201, None);
        let sink = CollectingSink::default();
        let publisher = publisher(StaticCredentials::missing(), &endpoint, &sink);

        let result = publisher.publish("post.md", "T", PublishOptions::new()).await;

        assert!(!result.success);
        assert_eq!(result.kind(), Some(ErrorKind::CredentialMissing));
        assert_eq!(result.status_code, None);
        assert!(endpoint.calls().is_empty());
        assert_eq!(sink.messages.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_content_makes_no_request() {
        let endpoint = RecordingEndpoint::answering(201, None);
        let sink = CollectingSink::default();
        let publisher = publisher(StaticCredentials::new("key"), &endpoint, &sink);

        let result = publisher
            .publish("drafts/nope.md", "T", PublishOptions::new())
            .await;

        assert_eq!(result.kind(), Some(ErrorKind::ContentNotFound));
        assert!(result.message().contains("drafts/nope.md"));
        assert!(endpoint.calls().is_empty());
    }

    #[tokio::test]
    async fn test_successful_publish() {
        let payload = json!({"id": 42, "url": "https://dev.to/x"});
        let endpoint = RecordingEndpoint::answering(201, Some(payload.clone()));
        let sink = CollectingSink::default();
        let publisher = publisher(StaticCredentials::new("secret"), &endpoint, &sink);

        let result = publisher
            .publish("post.md", "T", PublishOptions::new().tags(["a", "b"]).published(true))
            .await;

        assert!(result.is_success());
        assert_eq!(result.status_code, Some(201));
        assert_eq!(result.payload, Some(payload));
        assert!(result.error.is_none());

        let calls = endpoint.calls();
        assert_eq!(calls.len(), 1);
        let (api_key, request) = &calls[0];
        assert_eq!(api_key, "secret");
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({"article": {
                "title": "T",
                "body_markdown": "# Hello\nWorld",
                "tags": ["a", "b"],
                "published": true
            }})
        );

        let messages = sink.messages.lock().unwrap();
        assert_eq!(
            messages.as_slice(),
            &[(true, "Article published successfully!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_rejected_publish_keeps_error_detail() {
        let detail = json!({"error": "title can't be blank", "status": 422});
        let endpoint = RecordingEndpoint::answering(422, Some(detail.clone()));
        let sink = CollectingSink::default();
        let publisher = publisher(StaticCredentials::new("key"), &endpoint, &sink);

        let result = publisher.publish("post.md", "", PublishOptions::new()).await;

        assert!(!result.success);
        assert_eq!(result.kind(), Some(ErrorKind::RemoteRejected));
        assert_eq!(result.status_code, Some(422));
        assert_eq!(result.payload, Some(detail));
        assert!(result.message().contains("422"));
        assert_eq!(endpoint.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_other_success_statuses_are_not_created() {
        let endpoint = RecordingEndpoint::answering(200, Some(json!({"id": 1})));
        let sink = CollectingSink::default();
        let publisher = publisher(StaticCredentials::new("key"), &endpoint, &sink);

        let result = publisher.publish("post.md", "T", PublishOptions::new()).await;

        assert!(!result.success);
        assert_eq!(result.status_code, Some(200));
    }

    #[tokio::test]
    async fn test_tags_and_published_defaults() {
        let endpoint = RecordingEndpoint::answering(201, None);
        let sink = CollectingSink::default();
        let publisher = publisher(StaticCredentials::new("key"), &endpoint, &sink);

        publisher.publish("post.md", "T", PublishOptions::new()).await;
        publisher
            .publish("post.md", "T", PublishOptions::new().tags(Vec::<String>::new()))
            .await;
        publisher
            .publish("post.md", "T", PublishOptions::new().draft())
            .await;

        let calls = endpoint.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].1, calls[1].1);
        assert!(calls[0].1.article.tags.is_empty());
        assert!(calls[0].1.article.published);
        assert!(!calls[2].1.article.published);
    }
}
