//! Issue creation against the tracker.
//!
//! [`IssueService`] is the seam between batch processing and the network.
//! [`JiraClient`] talks to a real tracker; [`DryRunService`] previews
//! requests without sending them.

mod client;
mod dry_run;
mod error;
mod request;
mod status;

pub use client::{JiraClient, DEFAULT_TIMEOUT};
pub use dry_run::DryRunService;
pub use error::IssueError;
pub use request::{IssueFields, IssueRequest, IssueTypeRef, KeyRef, RichTextDocument};
pub use status::IssueStatus;

use std::future::Future;

/// An issue the tracker accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Tracker-assigned key (e.g. "ACME-12").
    pub key: String,
    /// Browser URL of the issue.
    pub url: String,
}

/// Creates issues in a tracker.
///
/// Implementations report every failure through the returned [`Result`];
/// callers never see a panic for a rejected or unreachable request.
pub trait IssueService {
    /// Sends one creation request.
    fn create_issue(
        &self,
        request: &IssueRequest,
    ) -> impl Future<Output = Result<CreatedIssue, IssueError>> + Send;
}
