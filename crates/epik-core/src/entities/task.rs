use serde::{Deserialize, Serialize};

use super::require_summary;
use crate::errors::StoryError;

/// A sub-item of a story, created in Jira as a `Sub-task`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    summary: String,
    description: String,
    assignee_id: Option<String>,
}

#[derive(Deserialize)]
struct TaskRecord {
    summary: String,
    description: String,
    #[serde(default)]
    assignee_id: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = String;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        require_summary("task", &record.summary)?;
        Ok(Self {
            summary: record.summary,
            description: record.description,
            assignee_id: record.assignee_id,
        })
    }
}

impl Task {
    /// Build a task with no explicit assignee.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::Validation`] if `summary` is blank.
    pub fn new(
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, StoryError> {
        Self::try_from(TaskRecord {
            summary: summary.into(),
            description: description.into(),
            assignee_id: None,
        })
        .map_err(StoryError::Validation)
    }

    #[must_use]
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn assignee_id(&self) -> Option<&str> {
        self.assignee_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assignee_defaults_to_none() {
        let task: Task =
            serde_json::from_str(r#"{"summary": "T1", "description": "d"}"#).unwrap();
        assert_eq!(task.summary(), "T1");
        assert_eq!(task.description(), "d");
        assert_eq!(task.assignee_id(), None);
    }

    #[test]
    fn null_assignee_is_none() {
        let task: Task = serde_json::from_str(
            r#"{"summary": "T1", "description": "d", "assignee_id": null}"#,
        )
        .unwrap();
        assert_eq!(task.assignee_id(), None);
    }

    #[test]
    fn blank_summary_is_rejected() {
        let err = Task::new("   ", "d").unwrap_err();
        assert!(matches!(err, StoryError::Validation(_)));
    }

    #[test]
    fn missing_description_is_rejected() {
        let result = serde_json::from_str::<Task>(r#"{"summary": "T1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn with_assignee_sets_id() {
        let task = Task::new("T1", "d").unwrap().with_assignee("acc-1");
        assert_eq!(task.assignee_id(), Some("acc-1"));
    }
}
