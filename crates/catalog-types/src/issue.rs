use serde::Serialize;
use serde_json::Value;

/// How much an issue matters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocking: fails validation and drives a non-zero exit
    Error,
    /// Advisory: reported, never blocks
    Warning,
}

/// A single finding against one content file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    #[serde(skip)]
    pub severity: Severity,
    pub file: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ValidationIssue {
    pub fn error(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            file: file.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn warning(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            file: file.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured context (e.g. the raw schema violation)
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_serializes_without_severity() {
        let issue = ValidationIssue::warning("subagents/a.md", "something");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"file": "subagents/a.md", "message": "something"})
        );
    }

    #[test]
    fn test_issue_details_are_serialized_when_present() {
        let issue = ValidationIssue::error("commands/x.md", "bad")
            .with_details(serde_json::json!({"schemaPath": "/required"}));
        assert!(issue.is_error());
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["details"]["schemaPath"], "/required");
    }
}
