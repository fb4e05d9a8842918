//! Preview client that never contacts the tracker.

use super::{CreatedIssue, IssueError, IssueRequest, IssueService};
use crate::config::TrackerConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Logs each request instead of sending it and hands out placeholder keys.
///
/// Placeholder keys have the form `{project}-DRYRUN-{n}`, so parent links
/// between tasks in the same list resolve exactly as in a live run.
#[derive(Debug)]
pub struct DryRunService {
    project_key: String,
    base_url: String,
    issued: AtomicU64,
}

impl DryRunService {
    /// Creates a preview client for the configured project.
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            project_key: config.project_key().to_string(),
            base_url: config.base_url().to_string(),
            issued: AtomicU64::new(0),
        }
    }

    #[cfg(test)]
    fn previewed(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}

impl IssueService for DryRunService {
    async fn create_issue(&self, request: &IssueRequest) -> Result<CreatedIssue, IssueError> {
        let body = serde_json::to_string(request)?;
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        let key = format!("{}-DRYRUN-{n}", self.project_key);

        info!(
            summary = %request.summary(),
            parent = request.parent_key().unwrap_or("-"),
            placeholder_key = %key,
            body = %body,
            "[DRY RUN] Would create issue"
        );

        Ok(CreatedIssue {
            url: format!("{}/browse/{key}", self.base_url),
            key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn can_hand_out_sequential_placeholder_keys() {
        let config =
            TrackerConfig::new("https://acme.atlassian.net", "t", "me@acme.io", "ACME").unwrap();
        let service = DryRunService::new(&config);

        let first = service
            .create_issue(&IssueRequest::new("ACME", "Epic A", "", "Epic"))
            .await
            .unwrap();
        let second = service
            .create_issue(&IssueRequest::new("ACME", "Task B", "", "Task").with_parent(&first.key))
            .await
            .unwrap();

        assert_eq!(first.key, "ACME-DRYRUN-1");
        assert_eq!(second.key, "ACME-DRYRUN-2");
        assert_eq!(
            second.url,
            "https://acme.atlassian.net/browse/ACME-DRYRUN-2"
        );
        assert_eq!(service.previewed(), 2);
    }
}
