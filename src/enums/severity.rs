use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Total order used for filtering: info < warning < error < critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Severity {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "critical")]
    Critical,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}
