//! Runner error types.

/// Errors that abort a run before any task is processed.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration or task list loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// HTTP client initialization errors.
    #[error("Failed to initialize tracker client: {0}")]
    Client(#[from] crate::issues::IssueError),
}
