use serde::{Deserialize, Serialize};
use crate::enums::error_category::ErrorCategory;
use crate::enums::severity::Severity;
use crate::enums::warning_category::WarningCategory;

/// Closed category of a single diagnostic. Severity is always derived from
/// the category, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssueCategory {
    Error(ErrorCategory),
    Warning(WarningCategory),
}

impl IssueCategory {
    pub fn severity(&self) -> Severity {
        match self {
            IssueCategory::Error(category) => match category {
                ErrorCategory::Unavailable => Severity::Warning,
                ErrorCategory::Syntax
                | ErrorCategory::Type
                | ErrorCategory::Linking
                | ErrorCategory::Dependency
                | ErrorCategory::Module
                | ErrorCategory::Unresolved
                | ErrorCategory::Conversion
                | ErrorCategory::Unknown => Severity::Error,
            },
            IssueCategory::Warning(category) => match category {
                WarningCategory::Deprecated
                | WarningCategory::ClosureReference
                | WarningCategory::ImplicitSelf => Severity::Warning,
                WarningCategory::UnusedVariable
                | WarningCategory::UnusedConstant
                | WarningCategory::UnusedImport
                | WarningCategory::Unknown => Severity::Info,
            },
        }
    }
}
