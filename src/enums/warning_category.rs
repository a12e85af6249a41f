use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningCategory {
    #[serde(rename = "unused_variable")]
    UnusedVariable,
    #[serde(rename = "unused_constant")]
    UnusedConstant,
    #[serde(rename = "unused_import")]
    UnusedImport,
    #[serde(rename = "deprecated")]
    Deprecated,
    #[serde(rename = "closure_reference")]
    ClosureReference,
    #[serde(rename = "implicit_self")]
    ImplicitSelf,
    #[serde(rename = "unknown")]
    Unknown,
}
