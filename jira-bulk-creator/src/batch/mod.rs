//! Sequential batch processing of task descriptors.
//!
//! Tasks are processed one at a time, in list order. A task whose
//! `parent_summary` names a task created earlier in the same run is linked
//! to that issue; any per-task problem becomes a [`TaskOutcome`] instead of
//! stopping the batch.

mod registry;

pub use registry::IssueRegistry;

use crate::issues::{IssueRequest, IssueService, IssueStatus};
use crate::summary::{ParentLink, TaskOutcome};
use crate::tasks::TaskDescriptor;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Skip reason for tasks without a summary.
pub const MISSING_SUMMARY: &str = "missing summary";

/// Turns task descriptors into created issues through an [`IssueService`].
#[derive(Debug)]
pub struct BatchProcessor<S> {
    service: S,
    project_key: String,
}

impl<S: IssueService> BatchProcessor<S> {
    /// Creates a processor that files issues in `project_key`.
    pub fn new(service: S, project_key: impl Into<String>) -> Self {
        Self {
            service,
            project_key: project_key.into(),
        }
    }

    #[cfg(test)]
    fn service(&self) -> &S {
        &self.service
    }

    /// Processes every task in order and returns one outcome per task.
    ///
    /// Each call starts from an empty registry, so running the same list
    /// twice creates every issue twice.
    pub async fn process_batch(&self, tasks: &[TaskDescriptor]) -> Vec<TaskOutcome> {
        self.process_batch_with_registry(tasks).await.0
    }

    /// Like [`process_batch`](Self::process_batch), also returning the
    /// registry of issues created during the call.
    pub async fn process_batch_with_registry(
        &self,
        tasks: &[TaskDescriptor],
    ) -> (Vec<TaskOutcome>, IssueRegistry) {
        let mut registry = IssueRegistry::new();
        let mut outcomes = Vec::with_capacity(tasks.len());

        for (position, task) in tasks.iter().enumerate() {
            outcomes.push(self.process_task(position, task, &mut registry).await);
        }

        info!(
            tasks = tasks.len(),
            created = outcomes.iter().filter(|o| o.is_created()).count(),
            "Batch finished"
        );
        (outcomes, registry)
    }

    async fn process_task(
        &self,
        position: usize,
        task: &TaskDescriptor,
        registry: &mut IssueRegistry,
    ) -> TaskOutcome {
        let Some(summary) = task.summary() else {
            warn!(position, "Skipping task with missing summary");
            return TaskOutcome::skipped(position, "", MISSING_SUMMARY);
        };

        let span = info_span!(
            "create_issue",
            position,
            summary = %summary,
            issue_type = %task.issue_type()
        );

        async {
            let mut request = IssueRequest::new(
                &self.project_key,
                summary,
                task.description(),
                task.issue_type(),
            );

            let parent = match task.parent_summary() {
                None => ParentLink::None,
                Some(parent) => match registry.resolve(parent) {
                    Some(key) => {
                        debug!(parent = %parent, parent_key = %key, "Linking to parent");
                        request = request.with_parent(key);
                        ParentLink::Linked {
                            summary: parent.to_string(),
                            key: key.to_string(),
                        }
                    }
                    None => {
                        warn!(
                            parent = %parent,
                            "Parent not yet created or does not exist, creating without link"
                        );
                        ParentLink::Unresolved {
                            summary: parent.to_string(),
                        }
                    }
                },
            };

            let status = match self.service.create_issue(&request).await {
                Ok(created) => {
                    info!(key = %created.key, "Issue created successfully");
                    if let Some(previous) = registry.record(summary, created.key.as_str()) {
                        debug!(previous_key = %previous, "Summary reused, replacing entry");
                    }
                    IssueStatus::Created {
                        key: created.key,
                        url: created.url,
                    }
                }
                Err(e) => {
                    error!(error = %e, "Failed to create issue");
                    IssueStatus::Failed {
                        status_code: e.status_code(),
                        error: e.to_string(),
                    }
                }
            };

            TaskOutcome {
                position,
                summary: summary.to_string(),
                parent,
                status,
            }
        }
        .instrument(span)
        .await
    }
}
