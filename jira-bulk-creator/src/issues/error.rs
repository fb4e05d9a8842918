//! Issue creation error types.

use thiserror::Error;

/// Errors that can occur while creating an issue.
#[derive(Debug, Error)]
pub enum IssueError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The tracker answered with a status other than 201 Created.
    #[error("Tracker returned status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The tracker reported success but the response carried no usable key.
    #[error("Unexpected tracker response: {0}")]
    InvalidResponse(String),

    /// The request body could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IssueError {
    /// Returns the HTTP status code, if the tracker sent one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidResponse(_) | Self::Encode(_) => None,
        }
    }
}
