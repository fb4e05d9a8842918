//! Orchestrates a bulk-creation run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::batch::BatchProcessor;
use crate::config::{load_tracker_config, TrackerConfig};
use crate::issues::{DryRunService, IssueService, JiraClient};
use crate::summary::{RunSummary, TaskOutcome};
use crate::tasks::{load_tasks, TaskDescriptor};
use tracing::{info, warn};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Aggregate counts.
    pub summary: RunSummary,
    /// One outcome per task, in input order.
    pub outcomes: Vec<TaskOutcome>,
}

/// Loads configuration and tasks, then creates every issue.
#[derive(Debug)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Executes the full run.
    ///
    /// Configuration and tasks are both loaded before the first request is
    /// sent. Per-task failures are reported in the returned [`RunReport`].
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the configuration or task list cannot be
    /// loaded, or if the HTTP client cannot be built.
    pub async fn run(&self) -> Result<RunReport, RunnerError> {
        let tracker = load_tracker_config(self.config.config_path(), self.config.overrides())?;
        info!(
            base_url = %tracker.base_url(),
            project = %tracker.project_key(),
            "Loaded tracker configuration"
        );

        let tasks = load_tasks(self.config.tasks_path())?;
        let mut summary = RunSummary::new(self.config.dry_run());
        summary.tasks_loaded = tasks.len();

        if tasks.is_empty() {
            warn!("No tasks found");
            return Ok(RunReport {
                summary,
                outcomes: Vec::new(),
            });
        }

        let outcomes = if self.config.dry_run() {
            info!("Dry run: no issues will be created");
            process(DryRunService::new(&tracker), &tracker, &tasks).await
        } else {
            let client = JiraClient::new(&tracker, self.config.timeout())?;
            process(client, &tracker, &tasks).await
        };

        for outcome in &outcomes {
            summary.record_outcome(outcome);
        }

        Ok(RunReport { summary, outcomes })
    }
}

async fn process<S: IssueService>(
    service: S,
    tracker: &TrackerConfig,
    tasks: &[TaskDescriptor],
) -> Vec<TaskOutcome> {
    BatchProcessor::new(service, tracker.project_key())
        .process_batch(tasks)
        .await
}
