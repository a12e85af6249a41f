use serde::{Deserialize, Serialize};
use crate::enums::issue_category::IssueCategory;
use crate::enums::severity::Severity;

/// A single classified error or warning extracted from one log line.
/// Positions are 1-based; the file path is reported as seen, not validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub message: String,
    #[serde(rename = "type")]
    pub category: IssueCategory,
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.category.severity()
    }
}
