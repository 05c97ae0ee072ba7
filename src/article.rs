//! Article creation request sent to the DEV API.

use serde::Serialize;

/// Optional caller inputs for a publish.
///
/// Both fields stay `None` until the request is built, so an explicit value
/// is never confused with a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOptions {
    /// Tags for the article (default: none)
    pub tags: Option<Vec<String>>,
    /// Publish immediately or keep as draft (default: publish)
    pub published: Option<bool>,
}

impl PublishOptions {
    /// Creates options with every field left to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether the article goes live immediately.
    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    /// Keeps the article as a draft.
    pub fn draft(self) -> Self {
        self.published(false)
    }
}

/// A DEV article as carried in the creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Article title
    pub title: String,
    /// Markdown body, verbatim from the content source
    pub body_markdown: String,
    /// Tags, in caller order
    pub tags: Vec<String>,
    /// Whether the article is publicly visible
    pub published: bool,
}

impl Article {
    /// Creates an article, resolving the optional inputs to their defaults.
    pub fn new(title: impl Into<String>, body_markdown: String, options: PublishOptions) -> Self {
        Self {
            title: title.into(),
            body_markdown,
            tags: options.tags.unwrap_or_default(),
            published: options.published.unwrap_or(true),
        }
    }
}

/// Request body for `POST /api/articles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRequest {
    pub article: Article,
}

impl ArticleRequest {
    /// Builds the request body from a title, the article body and the caller's options.
    pub fn new(title: impl Into<String>, body_markdown: String, options: PublishOptions) -> Self {
        Self {
            article: Article::new(title, body_markdown, options),
        }
    }
}
