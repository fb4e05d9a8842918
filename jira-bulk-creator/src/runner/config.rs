//! Runner configuration.

use crate::config::ConfigOverrides;
use crate::issues::DEFAULT_TIMEOUT;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for one bulk-creation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the tracker configuration file.
    config_path: PathBuf,
    /// Path to the task list.
    tasks_path: PathBuf,
    /// Values that replace those in the configuration file.
    overrides: ConfigOverrides,
    /// Whether to preview requests without sending them.
    dry_run: bool,
    /// Transport timeout for each create call.
    timeout: Duration,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(config_path: PathBuf, tasks_path: PathBuf) -> Self {
        Self {
            config_path,
            tasks_path,
            overrides: ConfigOverrides::default(),
            dry_run: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets values that take precedence over the configuration file.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the per-request transport timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the tracker configuration file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the task list path.
    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }

    /// Returns the configuration overrides.
    pub fn overrides(&self) -> &ConfigOverrides {
        &self.overrides
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the per-request transport timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
