use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "summary")]
    Summary,
    #[serde(rename = "detailed")]
    Detailed,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json
    }
}
