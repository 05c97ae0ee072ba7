//! # DEV Publishing Rust SDK
//!
//! Publishes a local markdown file as an article on DEV (dev.to) through its
//! public API.
//!
//! ## Features
//!
//! - **Simple API**: One call per article: `publisher.publish("./post.md", "Title", options)`
//! - **Typed outcomes**: Every failure comes back as a distinct [`PublishError`] kind inside a [`PublishResult`]
//! - **Pluggable**: Credentials, content, endpoint and reporting are traits with default implementations
//! - **Predictable**: Exactly one request per publish, never retried
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use devto_pub_rs::{Config, PublishOptions, Publisher, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let publisher = Publisher::new(Config::default())?;
//!     let result = publisher
//!         .publish("./article.md", "Kubernetes 103: Object", PublishOptions::new().tags(["kubernetes"]))
//!         .await;
//!     println!("Published: {}", result.is_success());
//!     Ok(())
//! }
//! ```

pub mod article;
pub mod config;
pub mod content;
pub mod credentials;
pub mod error;
pub mod http;
pub mod publisher;
pub mod report;
pub mod traits;

// Re-export main types for convenience
pub use article::{Article, ArticleRequest, PublishOptions};
pub use config::Config;
pub use error::{ErrorKind, PublishError, Result};
pub use publisher::{PublishResult, Publisher};
