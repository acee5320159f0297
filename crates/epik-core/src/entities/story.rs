use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Task, require_summary};
use crate::errors::StoryError;

/// A unit of work created in Jira as a `Story` under the configured epic.
///
/// The summary doubles as the key in batch results. Nothing enforces
/// uniqueness across a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "StoryRecord")]
pub struct Story {
    summary: String,
    description: String,
    tasks: Vec<Task>,
    assignee_id: Option<String>,
}

#[derive(Deserialize)]
struct StoryRecord {
    summary: String,
    description: String,
    #[serde(default)]
    tasks: Option<Vec<Task>>,
    #[serde(default)]
    assignee_id: Option<String>,
}

impl TryFrom<StoryRecord> for Story {
    type Error = String;

    fn try_from(record: StoryRecord) -> Result<Self, Self::Error> {
        require_summary("story", &record.summary)?;
        Ok(Self {
            summary: record.summary,
            description: record.description,
            tasks: record.tasks.unwrap_or_default(),
            assignee_id: record.assignee_id,
        })
    }
}

impl Story {
    /// Build a story with no tasks and no explicit assignee.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::Validation`] if `summary` is blank.
    pub fn new(
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, StoryError> {
        Self::try_from(StoryRecord {
            summary: summary.into(),
            description: description.into(),
            tasks: None,
            assignee_id: None,
        })
        .map_err(StoryError::Validation)
    }

    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    #[must_use]
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    /// Parse a story from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::Parse`] for malformed JSON and
    /// [`StoryError::Validation`] when fields are missing, mistyped or blank.
    pub fn from_json_str(json: &str) -> Result<Self, StoryError> {
        serde_json::from_str(json).map_err(StoryError::from_json)
    }

    /// Read and parse a story file.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Story::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tasks in input order. Empty when the input had `null` or no `tasks`.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    pub fn assignee_id(&self) -> Option<&str> {
        self.assignee_id.as_deref()
    }
}
