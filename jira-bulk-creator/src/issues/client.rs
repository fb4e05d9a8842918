//! HTTP client for the tracker's issue creation endpoint.

use super::{CreatedIssue, IssueError, IssueRequest, IssueService};
use crate::config::TrackerConfig;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default transport timeout for a single create call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated client for `POST {base_url}/rest/api/3/issue`.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    endpoint: String,
    base_url: String,
    user_email: String,
    api_token: String,
}

#[derive(Deserialize)]
struct CreateIssueResponse {
    key: Option<String>,
}

impl JiraClient {
    /// Builds a client for the configured tracker.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &TrackerConfig, timeout: Duration) -> Result<Self, IssueError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("jira-bulk-creator/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.issue_endpoint(),
            base_url: config.base_url().to_string(),
            user_email: config.user_email().to_string(),
            api_token: config.api_token().to_string(),
        })
    }

    /// Returns the issue creation endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IssueService for JiraClient {
    async fn create_issue(&self, request: &IssueRequest) -> Result<CreatedIssue, IssueError> {
        debug!(endpoint = %self.endpoint, summary = %request.summary(), "Sending create request");

        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.user_email, Some(&self.api_token))
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::CREATED {
            return Err(IssueError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let key = serde_json::from_str::<CreateIssueResponse>(&body)
            .ok()
            .and_then(|parsed| parsed.key)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| IssueError::InvalidResponse(format!("no issue key in body: {body}")))?;

        Ok(CreatedIssue {
            url: format!("{}/browse/{key}", self.base_url),
            key,
        })
    }
}
