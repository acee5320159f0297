//! # epik-jira
//!
//! Jira REST client and the story/sub-task creation workflow.
//!
//! - [`JiraClient`]: basic-auth client for issue read and issue create
//! - [`EpicManager`]: verifies the configured epic, then creates stories
//!   under it and sub-tasks under each story, absorbing partial failures
//!
//! # Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use epik_config::Settings;
//! use epik_core::Story;
//! use epik_jira::EpicManager;
//!
//! let settings = Settings::load_with_dotenv()?;
//! let story = Story::from_json_file("example/mystory1.json")?;
//!
//! let manager = EpicManager::new(&settings).await?;
//! let results = manager.create_stories(&[story]).await;
//! # Ok(())
//! # }
//! ```

mod client;
mod epic;
mod error;
mod fields;
mod http;

pub use client::{CreatedIssue, Issue, JiraClient};
pub use epic::{CreatedSubTask, CreationResult, EpicManager, StoryOutcome, SubTaskReport};
pub use error::{EpicError, JiraError};
pub use fields::{IssueFields, IssueType};
