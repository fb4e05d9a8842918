//! Run-scoped record of issues created so far.

use std::collections::HashMap;

/// Maps task summaries to the keys the tracker assigned during one run.
///
/// Entries are only added after a successful create, so a lookup hit always
/// names an issue that exists. A later create with the same summary replaces
/// the earlier key.
#[derive(Debug, Clone, Default)]
pub struct IssueRegistry {
    keys: HashMap<String, String>,
}

impl IssueRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a created issue, returning the key it replaced, if any.
    pub fn record(
        &mut self,
        summary: impl Into<String>,
        key: impl Into<String>,
    ) -> Option<String> {
        self.keys.insert(summary.into(), key.into())
    }

    /// Looks up the key assigned to a summary.
    pub fn resolve(&self, summary: &str) -> Option<&str> {
        self.keys.get(summary).map(String::as_str)
    }

    /// Returns the number of distinct summaries recorded.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_and_resolve() {
        let mut registry = IssueRegistry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.record("Epic A", "EPIC-1"), None);

        assert_eq!(registry.resolve("Epic A"), Some("EPIC-1"));
        assert_eq!(registry.resolve("Ghost"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn last_write_wins() {
        let mut registry = IssueRegistry::new();
        registry.record("Dup", "ACME-1");

        assert_eq!(registry.record("Dup", "ACME-2"), Some("ACME-1".to_string()));
        assert_eq!(registry.resolve("Dup"), Some("ACME-2"));
        assert_eq!(registry.len(), 1);
    }
}
