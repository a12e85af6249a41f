use serde::{Deserialize, Serialize};
use crate::structs::file_timing::FileTiming;

/// Aggregate compile/link telemetry. The scalar times mirror the toolchain's
/// own summary lines (last value seen wins); `file_timings` is an additive
/// per-file list and is accumulated independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetrics {
    pub files_compiled: usize,
    pub lines_compiled: usize,
    pub compilation_time: f64,
    pub linking_time: f64,
    pub modules_linked: usize,
    pub file_timings: Vec<FileTiming>,
}
