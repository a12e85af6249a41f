use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    #[serde(rename = "syntax_error")]
    Syntax,
    #[serde(rename = "type_mismatch")]
    Type,
    #[serde(rename = "link_error")]
    Linking,
    #[serde(rename = "dependency_error")]
    Dependency,
    #[serde(rename = "module_not_found")]
    Module,
    #[serde(rename = "unavailable_api")]
    Unavailable,
    #[serde(rename = "unresolved_identifier")]
    Unresolved,
    #[serde(rename = "conversion_error")]
    Conversion,
    #[serde(rename = "unknown")]
    Unknown,
}
