use serde::{Deserialize, Serialize};
use crate::enums::command_kind::CommandKind;
use crate::structs::build_metrics::BuildMetrics;
use crate::structs::issue::Issue;

/// Root analysis record. Assembled once per parse and never edited in place;
/// severity filtering produces a derived record instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildAnalysis {
    pub command: CommandKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub metrics: BuildMetrics,
    pub timestamp: String,
}
