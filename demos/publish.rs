//! Publishes a markdown file to DEV.
//!
//! ```text
//! DEV_TO_API_KEY=... cargo run --example publish -- <path> <title> [tag,tag,...] [--draft]
//! ```

use devto_pub_rs::{PublishOptions, Publisher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger (optional)
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let draft = args.iter().any(|arg| arg == "--draft");
    args.retain(|arg| arg != "--draft");

    let (path, title) = match (args.first(), args.get(1)) {
        (Some(path), Some(title)) => (path.clone(), title.clone()),
        _ => anyhow::bail!("usage: publish <path> <title> [tag,tag,...] [--draft]"),
    };

    let mut options = PublishOptions::new();
    if let Some(tags) = args.get(2) {
        options = options.tags(tags.split(',').map(str::trim).filter(|t| !t.is_empty()));
    }
    if draft {
        options = options.draft();
    }

    let publisher = Publisher::from_env()?;
    let result = publisher.publish(&path, &title, options).await;

    if let Some(url) = result
        .payload
        .as_ref()
        .and_then(|payload| payload.get("url"))
        .and_then(|value| value.as_str())
    {
        println!("✅ {url}");
    }

    Ok(())
}
