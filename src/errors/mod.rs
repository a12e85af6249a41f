use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BuildsiftError {
    // Input errors
    InputError {
        reason: String,
    },

    // Serialization errors
    SerializationError {
        content_type: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },

    // Monitoring errors
    MonitorTimeout {
        timeout_secs: u64,
        lines_processed: usize,
    },
}

impl BuildsiftError {
    pub fn input_error(reason: &str) -> Self {
        Self::InputError {
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn monitor_timeout(timeout_secs: u64, lines_processed: usize) -> Self {
        Self::MonitorTimeout {
            timeout_secs,
            lines_processed,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::InputError { reason } => {
                format!("Input error: {}\n💡 Pipe Swift build output to buildsift, e.g. `swift build | buildsift`", reason)
            }
            Self::SerializationError { content_type, reason } => {
                format!("Failed to encode {} output: {}", content_type, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
            Self::MonitorTimeout { timeout_secs, lines_processed } => {
                format!(
                    "Build timeout after {} seconds ({} lines processed)",
                    timeout_secs, lines_processed
                )
            }
        }
    }
}

impl fmt::Display for BuildsiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for BuildsiftError {}

impl From<std::io::Error> for BuildsiftError {
    fn from(error: std::io::Error) -> Self {
        BuildsiftError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for BuildsiftError {
    fn from(error: serde_json::Error) -> Self {
        BuildsiftError::SerializationError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

/// Result type alias for buildsift operations
pub type BuildsiftResult<T> = Result<T, BuildsiftError>;
