//! Task descriptor records.

use serde::{Deserialize, Deserializer, Serialize};

/// Issue type used when a task does not name one.
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

/// One entry of the task list, describing an issue to create.
///
/// Only `summary` is required for an issue to be created. A descriptor
/// without one still loads; it is skipped when the batch is processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Issue summary. Also the name other tasks use to refer to this one.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,

    /// Plain-text issue description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Issue type name (defaults to "Task").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,

    /// Summary of an earlier task in the same list to link as parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_summary: Option<String>,
}

impl TaskDescriptor {
    /// Creates a descriptor with only a summary.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the issue type.
    #[must_use]
    pub fn with_issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = Some(issue_type.into());
        self
    }

    /// Sets the parent summary.
    #[must_use]
    pub fn with_parent(mut self, parent_summary: impl Into<String>) -> Self {
        self.parent_summary = Some(parent_summary.into());
        self
    }

    /// Returns the summary, or `None` if it is missing or empty.
    pub fn summary(&self) -> Option<&str> {
        Some(self.summary.as_str()).filter(|s| !s.is_empty())
    }

    /// Returns the issue type, falling back to [`DEFAULT_ISSUE_TYPE`].
    pub fn issue_type(&self) -> &str {
        self.issue_type.as_deref().unwrap_or(DEFAULT_ISSUE_TYPE)
    }

    /// Returns the description text, empty if none was given.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Returns the parent summary, treating an empty string as absent.
    pub fn parent_summary(&self) -> Option<&str> {
        self.parent_summary.as_deref().filter(|s| !s.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
