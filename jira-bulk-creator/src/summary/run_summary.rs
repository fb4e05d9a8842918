//! Run summary types.

use super::outcome::TaskOutcome;
use crate::issues::IssueStatus;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of task descriptors loaded.
    pub tasks_loaded: usize,

    /// Number of issues successfully created.
    pub issues_created: usize,

    /// Number of tasks skipped (e.g., missing summary).
    pub issues_skipped: usize,

    /// Number of issues that failed to create.
    pub issues_failed: usize,

    /// Number of tasks whose parent could not be linked.
    pub unresolved_parents: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a task outcome.
    pub fn record_outcome(&mut self, outcome: &TaskOutcome) {
        match outcome.status {
            IssueStatus::Created { .. } => self.issues_created += 1,
            IssueStatus::Skipped { .. } => self.issues_skipped += 1,
            IssueStatus::Failed { .. } => self.issues_failed += 1,
        }
        if outcome.has_unresolved_parent() {
            self.unresolved_parents += 1;
        }
    }

    /// Returns true if any issue failed to create.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.issues_failed > 0
    }

    /// Returns true if no issue failed to create.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.issues_failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::ParentLink;

    #[test]
    fn can_record_outcome() {
        let mut summary = RunSummary::new(false);

        summary.record_outcome(&TaskOutcome {
            position: 0,
            summary: "Task X".to_string(),
            parent: ParentLink::Unresolved {
                summary: "Ghost".to_string(),
            },
            status: IssueStatus::Created {
                key: "ACME-1".to_string(),
                url: "https://example.com/browse/ACME-1".to_string(),
            },
        });
        summary.record_outcome(&TaskOutcome::skipped(1, "", "missing summary"));

        assert_eq!(summary.issues_created, 1);
        assert_eq!(summary.issues_skipped, 1);
        assert_eq!(summary.unresolved_parents, 1);
        assert!(summary.all_success());
    }

    #[test]
    fn failed_outcome_marks_failures() {
        let mut summary = RunSummary::new(false);

        summary.record_outcome(&TaskOutcome {
            position: 0,
            summary: "Task X".to_string(),
            parent: ParentLink::None,
            status: IssueStatus::Failed {
                error: "Tracker returned status 400: bad".to_string(),
                status_code: Some(400),
            },
        });

        assert!(summary.has_failures());
        assert!(!summary.all_success());
    }
}
