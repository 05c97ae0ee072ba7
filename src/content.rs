//! Content sources for article bodies.

use crate::error::{PublishError, Result};
use crate::traits::ContentSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use tracing::debug;

/// Reads article bodies from the local filesystem as UTF-8 text.
#[derive(Debug, Clone, Default)]
pub struct FsContentSource;

impl FsContentSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentSource for FsContentSource {
    async fn read(&self, reference: &str) -> Result<String> {
        match tokio::fs::read_to_string(reference).await {
            Ok(content) => {
                debug!("Read {} bytes from {reference}", content.len());
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PublishError::ContentNotFound {
                path: reference.to_string(),
            }),
            Err(e) => Err(PublishError::read_error(reference, e.to_string())),
        }
    }
}

/// Serves article bodies from memory, keyed by reference.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentSource {
    entries: HashMap<String, String>,
}

impl MemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the content behind `reference`.
    pub fn with(mut self, reference: impl Into<String>, content: impl Into<String>) -> Self {
        self.entries.insert(reference.into(), content.into());
        self
    }
}

#[async_trait]
impl ContentSource for MemoryContentSource {
    async fn read(&self, reference: &str) -> Result<String> {
        self.entries
            .get(reference)
            .cloned()
            .ok_or_else(|| PublishError::ContentNotFound {
                path: reference.to_string(),
            })
    }
}
