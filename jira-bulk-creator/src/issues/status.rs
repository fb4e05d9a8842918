//! Issue status types.

use serde::Serialize;

/// Status of an issue creation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IssueStatus {
    /// Issue successfully created.
    Created {
        /// Tracker-assigned issue key (e.g. "ACME-12").
        key: String,
        /// Browser URL of the issue.
        url: String,
    },

    /// Task was not sent to the tracker.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },

    /// Issue creation failed.
    Failed {
        /// Error message, including the tracker response body when there is one.
        error: String,
        /// HTTP status returned by the tracker, if any.
        status_code: Option<u16>,
    },
}
