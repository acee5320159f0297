use std::path::Path;

use anyhow::Context;
use epik_jira::EpicManager;

mod bootstrap;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("epik error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    init_tracing()?;

    let story = bootstrap::load_story(Path::new(bootstrap::STORY_PATH))?;
    let settings = bootstrap::load_settings()?;

    let manager = EpicManager::new(&settings)
        .await
        .context("failed to initialize epic manager")?;

    let results = manager.create_stories(std::slice::from_ref(&story)).await;
    for (summary, key) in &results {
        match key {
            Some(key) => tracing::info!(story = %summary, %key, "story created"),
            None => tracing::warn!(story = %summary, "story not created"),
        }
    }
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("EPIK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
