//! # epik-config
//!
//! Layered Jira settings loading for epik using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JIRA_PROJECT`, `JIRA_EPIC_KEY`, ..., or the
//!    lower-case setting name), read as plain strings
//! 2. `epik.toml` in the working directory
//! 3. Built-in defaults (empty)
//!
//! [`Settings::load_with_dotenv`] additionally reads a `.env` file into the
//! process environment first.
//!
//! Settings are validated when loaded: every required value must be present
//! and the epic key must belong to the project (`ABC-42` for project `ABC`).
//! There is no global cache. Load once and pass `&Settings` to whoever needs it.
//!
//! # Usage
//!
//! ```no_run
//! use epik_config::Settings;
//!
//! let settings = Settings::load_with_dotenv().expect("settings");
//! println!("Jira at {}", settings.jira_url());
//! ```

mod error;
mod raw;
mod settings;

pub use error::ConfigError;
pub use raw::{KEYS, RawSettings};
pub use settings::Settings;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Optional override file, resolved against the working directory.
pub const OVERRIDE_FILE: &str = "epik.toml";

impl Settings {
    /// Load settings from `epik.toml` and the environment, then validate.
    ///
    /// Does NOT call `dotenvy` -- use [`Settings::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a provider cannot be read, or a
    /// validation error from [`Settings::from_raw`].
    pub fn load() -> Result<Self, ConfigError> {
        let raw: RawSettings = Self::figment().extract()?;
        Self::from_raw(raw)
    }

    /// Load `.env` from the current directory (or a parent), then [`Settings::load`].
    ///
    /// A missing `.env` is not an error. Variables already present in the
    /// environment are not overwritten.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(RawSettings::default()));

        let local_path = PathBuf::from(OVERRIDE_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Serialized::defaults(env_values()))
    }
}

/// `JIRA_*` variables that are set, keyed by setting name.
///
/// Values are taken as-is, unparsed, so `0012345` or `1.50` stay text.
fn env_values() -> BTreeMap<&'static str, String> {
    KEYS.iter()
        .filter_map(|&key| {
            std::env::var(key.to_ascii_uppercase())
                .or_else(|_| std::env::var(key))
                .ok()
                .map(|value| (key, value))
        })
        .collect()
}
