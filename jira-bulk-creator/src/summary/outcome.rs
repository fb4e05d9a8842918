//! Per-task outcome types.

use crate::issues::IssueStatus;
use serde::Serialize;

/// How a task's parent reference was handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "link", rename_all = "snake_case")]
pub enum ParentLink {
    /// The task named no parent.
    None,

    /// The parent was created earlier in the run and the request was linked.
    Linked {
        /// Parent summary.
        summary: String,
        /// Parent key attached to the request.
        key: String,
    },

    /// The parent was not created earlier in the run; the request was sent
    /// without a link.
    Unresolved {
        /// Parent summary that could not be resolved.
        summary: String,
    },
}

/// Result of processing one task descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    /// Zero-based position of the task in the input list.
    pub position: usize,

    /// Task summary (empty when the task had none).
    pub summary: String,

    /// Parent link handling.
    pub parent: ParentLink,

    /// Creation status.
    #[serde(flatten)]
    pub status: IssueStatus,
}

impl TaskOutcome {
    /// Builds the outcome for a task that was never sent.
    pub fn skipped(position: usize, summary: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            position,
            summary: summary.into(),
            parent: ParentLink::None,
            status: IssueStatus::Skipped {
                reason: reason.into(),
            },
        }
    }

    /// Returns the created issue key, if the task succeeded.
    pub fn key(&self) -> Option<&str> {
        match &self.status {
            IssueStatus::Created { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Returns true if the issue was created.
    pub fn is_created(&self) -> bool {
        matches!(self.status, IssueStatus::Created { .. })
    }

    /// Returns true if the parent could not be resolved.
    pub fn has_unresolved_parent(&self) -> bool {
        matches!(self.parent, ParentLink::Unresolved { .. })
    }
}
