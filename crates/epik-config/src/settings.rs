//! Validated Jira settings.

use std::fmt;

use crate::{ConfigError, RawSettings};

/// Jira connection and placement settings.
///
/// Only obtainable through validation, so holding a `Settings` means every
/// required value is present and the epic belongs to the project.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    project: String,
    epic_key: String,
    email: String,
    token: String,
    host: String,
    default_assignee: Option<String>,
}

impl TryFrom<RawSettings> for Settings {
    type Error = ConfigError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let project = required("jira_project", raw.jira_project)?;
        let epic_key = required("jira_epic_key", raw.jira_epic_key)?;
        let email = required("jira_email", raw.jira_email)?;
        let token = required("jira_token", raw.jira_token)?;
        let host = required("jira_host", raw.jira_host)?;
        let default_assignee = Some(raw.jira_id).filter(|id| !id.trim().is_empty());

        let prefix = epic_key.split('-').next().unwrap_or_default();
        if prefix != project {
            return Err(ConfigError::EpicProjectMismatch {
                epic_key,
                project_key: project,
            });
        }

        Ok(Self {
            project,
            epic_key,
            email,
            token,
            host,
            default_assignee,
        })
    }
}

fn required(field: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingValue { field });
    }
    Ok(value)
}

impl Settings {
    /// Validate an in-memory set of values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] for the first blank required
    /// value, or [`ConfigError::EpicProjectMismatch`] when the epic key prefix
    /// differs from the project key.
    pub fn from_raw(raw: RawSettings) -> Result<Self, ConfigError> {
        Self::try_from(raw)
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn epic_key(&self) -> &str {
        &self.epic_key
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn default_assignee(&self) -> Option<&str> {
        self.default_assignee.as_deref()
    }

    /// Base URL of the Jira instance.
    pub fn jira_url(&self) -> String {
        format!("https://{}/", self.host)
    }

    /// The explicit assignee if given, else the configured default.
    pub fn assignee_or_default<'a>(&'a self, assignee_id: Option<&'a str>) -> Option<&'a str> {
        assignee_id.or(self.default_assignee.as_deref())
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("project", &self.project)
            .field("epic_key", &self.epic_key)
            .field("email", &self.email)
            .field("token", &"[redacted]")
            .field("host", &self.host)
            .field("default_assignee", &self.default_assignee)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(project: &str, epic_key: &str) -> RawSettings {
        RawSettings {
            jira_project: project.into(),
            jira_epic_key: epic_key.into(),
            jira_email: "dev@example.com".into(),
            jira_token: "secret-token".into(),
            jira_host: "acme.atlassian.net".into(),
            jira_id: "acc-default".into(),
        }
    }

    #[test]
    fn matching_epic_prefix_is_accepted() {
        let settings = Settings::from_raw(raw("ABC", "ABC-1")).unwrap();
        assert_eq!(settings.project(), "ABC");
        assert_eq!(settings.epic_key(), "ABC-1");
        assert_eq!(settings.default_assignee(), Some("acc-default"));
    }

    #[test]
    fn foreign_epic_prefix_is_rejected() {
        let err = Settings::from_raw(raw("ABC", "XYZ-1")).unwrap_err();
        match err {
            ConfigError::EpicProjectMismatch {
                epic_key,
                project_key,
            } => {
                assert_eq!(epic_key, "XYZ-1");
                assert_eq!(project_key, "ABC");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn prefix_comparison_is_exact() {
        assert!(Settings::from_raw(raw("ABC", "ABCD-1")).is_err());
        assert!(Settings::from_raw(raw("ABC", "abc-1")).is_err());
    }

    #[test]
    fn blank_required_value_is_missing() {
        let mut values = raw("ABC", "ABC-1");
        values.jira_token = "  ".into();
        let err = Settings::from_raw(values).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingValue {
                field: "jira_token"
            }
        ));
    }

    #[test]
    fn missing_value_reported_before_mismatch() {
        let mut values = raw("ABC", "XYZ-1");
        values.jira_host = String::new();
        let err = Settings::from_raw(values).unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue { field: "jira_host" }));
    }

    #[test]
    fn blank_default_assignee_is_none() {
        let mut values = raw("ABC", "ABC-1");
        values.jira_id = String::new();
        let settings = Settings::from_raw(values).unwrap();
        assert_eq!(settings.default_assignee(), None);
        assert_eq!(settings.assignee_or_default(None), None);
        assert_eq!(settings.assignee_or_default(Some("acc-1")), Some("acc-1"));
    }

    #[test]
    fn assignee_falls_back_to_default() {
        let settings = Settings::from_raw(raw("ABC", "ABC-1")).unwrap();
        assert_eq!(settings.assignee_or_default(None), Some("acc-default"));
        assert_eq!(settings.assignee_or_default(Some("acc-2")), Some("acc-2"));
    }

    #[test]
    fn jira_url_uses_https() {
        let settings = Settings::from_raw(raw("ABC", "ABC-1")).unwrap();
        assert_eq!(settings.jira_url(), "https://acme.atlassian.net/");
    }

    #[test]
    fn debug_output_hides_token() {
        let settings = Settings::from_raw(raw("ABC", "ABC-1")).unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("[redacted]"));
    }
}
