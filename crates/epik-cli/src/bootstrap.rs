use std::path::Path;

use anyhow::Context;
use epik_config::Settings;
use epik_core::Story;

/// Story file the demo driver submits.
pub const STORY_PATH: &str = "example/mystory1.json";

pub fn load_story(path: &Path) -> anyhow::Result<Story> {
    Story::from_json_file(path)
        .with_context(|| format!("failed to load story from {}", path.display()))
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = Settings::load_with_dotenv().context("invalid Jira settings")?;
    tracing::debug!(?settings, "loaded settings");
    Ok(settings)
}
