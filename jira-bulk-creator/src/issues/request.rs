//! Issue creation request bodies.

use serde::Serialize;

/// Body of a `POST /rest/api/3/issue` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRequest {
    /// Issue fields.
    pub fields: IssueFields,
}

/// Fields of a new issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueFields {
    /// Project the issue is created in.
    pub project: KeyRef,
    /// Issue summary.
    pub summary: String,
    /// Rich-text description.
    pub description: RichTextDocument,
    /// Issue type.
    #[serde(rename = "issuetype")]
    pub issue_type: IssueTypeRef,
    /// Parent issue, when linked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<KeyRef>,
}

/// Reference to a project or issue by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRef {
    /// Project or issue key.
    pub key: String,
}

/// Reference to an issue type by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTypeRef {
    /// Issue type name.
    pub name: String,
}

/// Atlassian Document Format document holding a single paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextDocument {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u32,
    content: Vec<RichTextNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct RichTextNode {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    content: Vec<RichTextNode>,
}

impl RichTextDocument {
    /// Wraps plain text in a one-paragraph document. Empty text still
    /// produces a text node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        let text_node = RichTextNode {
            kind: "text",
            text: Some(text.into()),
            content: Vec::new(),
        };
        Self {
            kind: "doc",
            version: 1,
            content: vec![RichTextNode {
                kind: "paragraph",
                text: None,
                content: vec![text_node],
            }],
        }
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> String {
        self.content
            .iter()
            .flat_map(|paragraph| paragraph.content.iter())
            .filter_map(|node| node.text.as_deref())
            .collect()
    }
}

impl IssueRequest {
    /// Builds an unlinked request.
    pub fn new(
        project_key: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            fields: IssueFields {
                project: KeyRef {
                    key: project_key.into(),
                },
                summary: summary.into(),
                description: RichTextDocument::paragraph(description),
                issue_type: IssueTypeRef {
                    name: issue_type.into(),
                },
                parent: None,
            },
        }
    }

    /// Links the request to a parent issue.
    #[must_use]
    pub fn with_parent(mut self, parent_key: impl Into<String>) -> Self {
        self.fields.parent = Some(KeyRef {
            key: parent_key.into(),
        });
        self
    }

    /// Returns the issue summary.
    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    /// Returns the parent key, if linked.
    pub fn parent_key(&self) -> Option<&str> {
        self.fields.parent.as_ref().map(|p| p.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn can_serialize_unlinked_request() {
        let request = IssueRequest::new("ACME", "Task X", "", "Task");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "fields": {
                    "project": { "key": "ACME" },
                    "summary": "Task X",
                    "description": {
                        "type": "doc",
                        "version": 1,
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "" }]
                        }]
                    },
                    "issuetype": { "name": "Task" }
                }
            })
        );
    }

    #[test]
    fn linked_request_carries_parent_key() {
        let request =
            IssueRequest::new("ACME", "Task B", "Details", "Story").with_parent("EPIC-1");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["fields"]["parent"], json!({ "key": "EPIC-1" }));
        assert_eq!(value["fields"]["issuetype"]["name"], "Story");
        assert_eq!(request.parent_key(), Some("EPIC-1"));
        assert_eq!(request.fields.description.text(), "Details");
    }
}
