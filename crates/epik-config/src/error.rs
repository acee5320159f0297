//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required value is absent or blank.
    #[error("Missing required configuration value '{field}'")]
    MissingValue { field: &'static str },

    /// The epic key does not belong to the configured project.
    #[error("Jira epic {epic_key} doesn't match project {project_key}")]
    EpicProjectMismatch {
        epic_key: String,
        project_key: String,
    },
}
