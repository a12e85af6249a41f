use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTiming {
    pub file: String,
    pub duration: f64,
    /// Reserved; the build log carries no per-file line counts.
    pub lines_compiled: usize,
}
