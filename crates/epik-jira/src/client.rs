//! Jira REST v2 client: read an issue, create an issue.

use std::time::Duration;

use epik_config::Settings;
use serde::{Deserialize, Serialize};

use crate::error::JiraError;
use crate::fields::IssueFields;
use crate::http::{check_response, decode};

/// An issue as returned by `GET /rest/api/2/issue/{key}`. Only the
/// identifiers are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub id: String,
    pub key: String,
}

/// Response body of `POST /rest/api/2/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
}

#[derive(Serialize)]
struct CreateIssueRequest<'a> {
    fields: &'a IssueFields,
}

/// Authenticated handle on a Jira instance.
///
/// Building one performs no network call.
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    email: String,
    token: String,
}

impl JiraClient {
    /// Create a client for `base_url` using basic auth (`email` + API token).
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, JiraError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("epik/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self {
            http,
            base_url,
            email: email.into(),
            token: token.into(),
        })
    }

    /// Create a client from the host and credentials in `settings`.
    ///
    /// # Errors
    ///
    /// See [`JiraClient::new`].
    pub fn from_settings(settings: &Settings) -> Result<Self, JiraError> {
        Self::new(settings.jira_url(), settings.email(), settings.token())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn issue_url(&self, key: Option<&str>) -> String {
        match key {
            Some(key) => format!(
                "{}/rest/api/2/issue/{}",
                self.base_url,
                urlencoding::encode(key)
            ),
            None => format!("{}/rest/api/2/issue", self.base_url),
        }
    }

    /// Read an issue by key.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError`] if the request fails, Jira returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn get_issue(&self, key: &str) -> Result<Issue, JiraError> {
        let resp = self
            .http
            .get(self.issue_url(Some(key)))
            .basic_auth(&self.email, Some(&self.token))
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }

    /// Create an issue from `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError`] if the request fails, Jira returns a
    /// non-success status, or the body lacks the new issue's key.
    pub async fn create_issue(&self, fields: &IssueFields) -> Result<CreatedIssue, JiraError> {
        let resp = self
            .http
            .post(self.issue_url(None))
            .basic_auth(&self.email, Some(&self.token))
            .json(&CreateIssueRequest { fields })
            .send()
            .await?;
        decode(check_response(resp).await?).await
    }
}
