//! Trait abstractions for the publisher's collaborators.
//!
//! This module defines the seams a [`Publisher`](crate::Publisher) is built from:
//! - Credential lookup
//! - Content reading
//! - Article submission
//! - Outcome reporting
//!
//! Each one can be swapped for a test double or a different backend.

use crate::article::ArticleRequest;
use crate::error::Result;
use crate::http::EndpointResponse;
use crate::publisher::PublishResult;
use async_trait::async_trait;

/// Supplies the API key.
pub trait CredentialProvider: Send + Sync {
    /// Name of the credential, used in error messages.
    fn name(&self) -> &str;

    /// Resolves the API key. Called once per publish, never cached.
    fn api_key(&self) -> Option<String>;
}

/// Supplies the raw article body for a reference.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Reads the full text behind `reference`.
    ///
    /// Must return [`PublishError::ContentNotFound`](crate::PublishError::ContentNotFound)
    /// when nothing exists there, and
    /// [`PublishError::ContentRead`](crate::PublishError::ContentRead) for any other failure.
    async fn read(&self, reference: &str) -> Result<String>;
}

/// Submits article creation requests.
#[async_trait]
pub trait PublishEndpoint: Send + Sync {
    /// Sends one request. Any HTTP status is a successful call; only a failure
    /// to get a response is an error.
    async fn create_article(
        &self,
        api_key: &str,
        request: &ArticleRequest,
    ) -> Result<EndpointResponse>;
}

/// Renders publish outcomes.
pub trait ReportSink: Send + Sync {
    fn report(&self, result: &PublishResult);
}
