//! Task list loading.
//!
//! A task list is a JSON array of [`TaskDescriptor`] objects. Order matters:
//! a task can only be linked to a parent listed before it.

mod descriptor;

pub use descriptor::{TaskDescriptor, DEFAULT_ISSUE_TYPE};

use crate::config::{read_file, ConfigError};
use std::path::Path;
use tracing::info;

/// Loads the full task list from a JSON file.
///
/// Descriptors without a summary are kept; they are reported as skipped when
/// the batch runs rather than failing the whole load. A field of the wrong
/// type (e.g. a numeric `summary`) fails the whole load.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, or is not a
/// JSON array of task objects.
pub fn load_tasks(path: &Path) -> Result<Vec<TaskDescriptor>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = read_file(path)?;
    let tasks: Vec<TaskDescriptor> =
        serde_json::from_str(&content).map_err(|e| ConfigError::JsonError {
            path: path.display().to_string(),
            source: e,
        })?;

    info!(path = %path.display(), count = tasks.len(), "Loaded tasks");
    Ok(tasks)
}
