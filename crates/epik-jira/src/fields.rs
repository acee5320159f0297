//! Request payloads for issue creation.

use serde::Serialize;

/// Jira issue types created by epik.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueType {
    #[serde(rename = "Story")]
    Story,
    #[serde(rename = "Sub-task")]
    SubTask,
}

impl IssueType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Story => "Story",
            Self::SubTask => "Sub-task",
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct KeyRef {
    key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct NameRef {
    name: IssueType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct IdRef {
    id: String,
}

/// The `fields` object of a Jira create-issue request.
///
/// Serializes as
/// `{"project": {"key"}, "summary", "description", "issuetype": {"name"},
/// "parent": {"key"}, "assignee": {"id"}}`, with `assignee` omitted when
/// nobody is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueFields {
    project: KeyRef,
    summary: String,
    description: String,
    #[serde(rename = "issuetype")]
    issue_type: NameRef,
    parent: KeyRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<IdRef>,
}

impl IssueFields {
    pub fn new(
        project_key: &str,
        issue_type: IssueType,
        parent_key: &str,
        summary: &str,
        description: &str,
        assignee_id: Option<&str>,
    ) -> Self {
        Self {
            project: KeyRef {
                key: project_key.to_owned(),
            },
            summary: summary.to_owned(),
            description: description.to_owned(),
            issue_type: NameRef { name: issue_type },
            parent: KeyRef {
                key: parent_key.to_owned(),
            },
            assignee: assignee_id.map(|id| IdRef { id: id.to_owned() }),
        }
    }

    pub const fn issue_type(&self) -> IssueType {
        self.issue_type.name
    }

    pub fn parent_key(&self) -> &str {
        &self.parent.key
    }

    pub fn assignee_id(&self) -> Option<&str> {
        self.assignee.as_ref().map(|a| a.id.as_str())
    }
}
