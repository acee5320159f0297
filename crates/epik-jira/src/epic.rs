//! Story and sub-task creation under a verified epic.
//!
//! An [`EpicManager`] only exists once its epic has been read successfully:
//! construction is the verification step, and there is no way to re-verify
//! or reconnect afterwards. All requests are issued one at a time.

use std::collections::BTreeMap;

use epik_config::Settings;
use epik_core::{Story, Task};

use crate::client::JiraClient;
use crate::error::{EpicError, JiraError};
use crate::fields::{IssueFields, IssueType};

/// Story summary → created issue key, `None` where the story failed.
///
/// Summaries are not unique; a later story with the same summary overwrites
/// the earlier entry.
pub type CreationResult = BTreeMap<String, Option<String>>;

/// A sub-task that was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSubTask {
    pub summary: String,
    pub key: String,
}

/// What happened to each task handed to
/// [`EpicManager::create_sub_tasks_in_story`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubTaskReport {
    /// Created sub-tasks, in input order.
    pub created: Vec<CreatedSubTask>,
    /// Summaries of tasks that failed, in input order.
    pub failed: Vec<String>,
}

impl SubTaskReport {
    pub fn attempted(&self) -> usize {
        self.created.len() + self.failed.len()
    }

    pub fn all_created(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Result of creating one story together with its sub-tasks.
#[derive(Debug)]
pub enum StoryOutcome {
    /// The story exists. Individual sub-tasks may still have failed.
    Created { key: String, sub_tasks: SubTaskReport },
    /// The story itself could not be created; no sub-tasks were attempted.
    Failed(EpicError),
}

impl StoryOutcome {
    pub fn issue_key(&self) -> Option<&str> {
        match self {
            Self::Created { key, .. } => Some(key),
            Self::Failed(_) => None,
        }
    }

    pub fn into_issue_key(self) -> Option<String> {
        match self {
            Self::Created { key, .. } => Some(key),
            Self::Failed(_) => None,
        }
    }

    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Creates stories (and their sub-tasks) under the epic named in [`Settings`].
pub struct EpicManager<'a> {
    settings: &'a Settings,
    jira: JiraClient,
}

impl<'a> EpicManager<'a> {
    /// Connect to the Jira host in `settings` and verify the epic exists.
    ///
    /// # Errors
    ///
    /// Returns [`EpicError::ClientSetup`] if the HTTP client cannot be built
    /// and [`EpicError::EpicNotFound`] if the epic cannot be read.
    pub async fn new(settings: &'a Settings) -> Result<Self, EpicError> {
        let jira = JiraClient::from_settings(settings).map_err(EpicError::ClientSetup)?;
        Self::with_client(settings, jira).await
    }

    /// Like [`EpicManager::new`], with a caller-supplied client.
    ///
    /// # Errors
    ///
    /// Returns [`EpicError::EpicNotFound`] if the epic cannot be read.
    pub async fn with_client(settings: &'a Settings, jira: JiraClient) -> Result<Self, EpicError> {
        let manager = Self { settings, jira };
        manager.verify_epic_exists().await?;
        Ok(manager)
    }

    /// Any failure reading the epic (missing, unauthorized, unreachable)
    /// counts as not found.
    async fn verify_epic_exists(&self) -> Result<(), EpicError> {
        let epic_key = self.settings.epic_key();
        match self.jira.get_issue(epic_key).await {
            Ok(epic) => {
                tracing::info!(epic = %epic.key, id = %epic.id, "verified epic exists");
                Ok(())
            }
            Err(source) => Err(EpicError::EpicNotFound {
                epic_key: epic_key.to_owned(),
                source,
            }),
        }
    }

    fn issue_fields(
        &self,
        issue_type: IssueType,
        parent_key: &str,
        summary: &str,
        description: &str,
        assignee_id: Option<&str>,
    ) -> IssueFields {
        IssueFields::new(
            self.settings.project(),
            issue_type,
            parent_key,
            summary,
            description,
            self.settings.assignee_or_default(assignee_id),
        )
    }

    /// Create `story` as a `Story` parented to the epic and return its key.
    ///
    /// # Errors
    ///
    /// Returns [`EpicError::StoryCreation`]. The Jira error is attached as the
    /// source only when the failure was HTTP-level.
    pub async fn create_story_within_epic(&self, story: &Story) -> Result<String, EpicError> {
        let fields = self.issue_fields(
            IssueType::Story,
            self.settings.epic_key(),
            story.summary(),
            story.description(),
            story.assignee_id(),
        );

        match self.jira.create_issue(&fields).await {
            Ok(created) => {
                tracing::info!(
                    story = story.summary(),
                    key = %created.key,
                    issue_type = %fields.issue_type(),
                    "created story"
                );
                Ok(created.key)
            }
            Err(error) if error.is_http_level() => {
                tracing::error!(story = story.summary(), %error, "failed to create story");
                Err(EpicError::StoryCreation {
                    summary: story.summary().to_owned(),
                    source: Some(error),
                })
            }
            Err(error) => {
                tracing::error!(story = story.summary(), %error, "unexpected error creating story");
                Err(EpicError::StoryCreation {
                    summary: story.summary().to_owned(),
                    source: None,
                })
            }
        }
    }

    /// Create each task as a `Sub-task` of `parent_key`, in order.
    ///
    /// A failing task is logged and recorded in the report; the remaining
    /// tasks are still attempted. Never fails as a whole.
    pub async fn create_sub_tasks_in_story(&self, tasks: &[Task], parent_key: &str) -> SubTaskReport {
        let mut report = SubTaskReport::default();

        for task in tasks {
            let fields = self.issue_fields(
                IssueType::SubTask,
                parent_key,
                task.summary(),
                task.description(),
                task.assignee_id(),
            );
            match self.jira.create_issue(&fields).await {
                Ok(created) => {
                    tracing::info!(
                        task = task.summary(),
                        key = %created.key,
                        issue_type = %fields.issue_type(),
                        parent = parent_key,
                        "created sub-task"
                    );
                    report.created.push(CreatedSubTask {
                        summary: task.summary().to_owned(),
                        key: created.key,
                    });
                }
                Err(error) => {
                    log_sub_task_failure(task, &error);
                    report.failed.push(task.summary().to_owned());
                }
            }
        }

        if !report.all_created() {
            tracing::warn!(
                parent = parent_key,
                "failed to create {}/{} tasks",
                report.failed.len(),
                tasks.len()
            );
        }
        report
    }

    /// Create `story`, then its tasks as sub-tasks.
    ///
    /// A story-creation failure is logged and returned as
    /// [`StoryOutcome::Failed`]; sub-task failures only show up in the report.
    pub async fn create_story_with_sub_tasks(&self, story: &Story) -> StoryOutcome {
        let key = match self.create_story_within_epic(story).await {
            Ok(key) => key,
            Err(error) => {
                tracing::error!(story = story.summary(), %error, "the story was not created");
                return StoryOutcome::Failed(error);
            }
        };

        if !story.has_tasks() {
            tracing::warn!(story = story.summary(), "no tasks found for story");
            return StoryOutcome::Created {
                key,
                sub_tasks: SubTaskReport::default(),
            };
        }

        let sub_tasks = self.create_sub_tasks_in_story(story.tasks(), &key).await;
        StoryOutcome::Created { key, sub_tasks }
    }

    /// Create every story in `stories`, in order, regardless of earlier
    /// failures. Calling this twice creates everything twice.
    pub async fn create_stories(&self, stories: &[Story]) -> CreationResult {
        let mut results = CreationResult::new();
        let mut success_count = 0_usize;

        for story in stories {
            let outcome = self.create_story_with_sub_tasks(story).await;
            if outcome.is_created() {
                success_count += 1;
            }
            results.insert(story.summary().to_owned(), outcome.into_issue_key());
        }

        tracing::info!(
            "created {success_count}/{} stories successfully",
            stories.len()
        );
        results
    }
}

fn log_sub_task_failure(task: &Task, error: &JiraError) {
    if error.is_http_level() {
        tracing::error!(task = task.summary(), %error, "failed to create sub-task");
    } else {
        tracing::error!(task = task.summary(), %error, "unexpected error creating sub-task");
    }
}
