#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod batch;
pub mod config;
pub mod issues;
pub mod runner;
pub mod summary;
pub mod tasks;

pub use batch::{BatchProcessor, IssueRegistry, MISSING_SUMMARY};
pub use config::{load_tracker_config, ConfigError, ConfigOverrides, TrackerConfig};
pub use issues::{
    CreatedIssue, DryRunService, IssueError, IssueRequest, IssueService, IssueStatus, JiraClient,
    DEFAULT_TIMEOUT,
};
pub use runner::{RunReport, Runner, RunnerConfig, RunnerError};
pub use summary::{ParentLink, RunSummary, TaskOutcome};
pub use tasks::{load_tasks, TaskDescriptor, DEFAULT_ISSUE_TYPE};
