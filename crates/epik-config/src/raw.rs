//! Unvalidated settings as extracted from the provider chain.

use serde::{Deserialize, Serialize};

/// Setting keys, as they appear in `epik.toml` and (upper-cased) in the
/// environment.
pub const KEYS: [&str; 6] = [
    "jira_project",
    "jira_epic_key",
    "jira_email",
    "jira_token",
    "jira_host",
    "jira_id",
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawSettings {
    /// Project key, e.g. `ABC`.
    #[serde(default)]
    pub jira_project: String,

    /// Key of the epic new stories are parented to, e.g. `ABC-42`.
    #[serde(default)]
    pub jira_epic_key: String,

    /// Account email used for basic auth.
    #[serde(default)]
    pub jira_email: String,

    /// API token used for basic auth.
    #[serde(default)]
    pub jira_token: String,

    /// Jira host without scheme, e.g. `acme.atlassian.net`.
    #[serde(default)]
    pub jira_host: String,

    /// Default assignee account id. Blank means no default.
    #[serde(default)]
    pub jira_id: String,
}
