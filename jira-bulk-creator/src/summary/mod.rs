//! Run summary types and helpers.

mod outcome;
mod run_summary;

pub use outcome::{ParentLink, TaskOutcome};
pub use run_summary::RunSummary;
