//! Jira client and orchestration error types.

use thiserror::Error;

/// Errors from a single Jira REST call.
#[derive(Debug, Error)]
pub enum JiraError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Jira returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by Jira.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Jira returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds Jira asked us to wait.
        retry_after_secs: u64,
    },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl JiraError {
    /// Whether the failure happened at the HTTP layer (transport or status),
    /// as opposed to an unexpected response body.
    pub const fn is_http_level(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::RateLimited { .. }
        )
    }
}

/// Errors raised by [`crate::EpicManager`].
#[derive(Debug, Error)]
pub enum EpicError {
    /// The HTTP client could not be built.
    #[error("failed to set up Jira client")]
    ClientSetup(#[source] JiraError),

    /// The configured epic could not be read, for whatever reason.
    #[error("Jira epic not found: {epic_key}")]
    EpicNotFound {
        epic_key: String,
        #[source]
        source: JiraError,
    },

    /// A story could not be created. `source` is only kept for HTTP-level
    /// failures.
    #[error("Failed to create story: {summary}")]
    StoryCreation {
        summary: String,
        #[source]
        source: Option<JiraError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_level_classification() {
        assert!(
            JiraError::Api {
                status: 400,
                message: String::new()
            }
            .is_http_level()
        );
        assert!(
            JiraError::RateLimited {
                retry_after_secs: 5
            }
            .is_http_level()
        );
        assert!(!JiraError::Parse("missing key".into()).is_http_level());
    }

    #[test]
    fn story_creation_source_is_optional() {
        use std::error::Error as _;

        let with_source = EpicError::StoryCreation {
            summary: "S1".into(),
            source: Some(JiraError::Api {
                status: 400,
                message: "bad".into(),
            }),
        };
        assert!(with_source.source().is_some());

        let without = EpicError::StoryCreation {
            summary: "S1".into(),
            source: None,
        };
        assert!(without.source().is_none());
        assert_eq!(without.to_string(), "Failed to create story: S1");
    }
}
