use chrono::Utc;
use crate::enums::severity::Severity;
use crate::services::command_classifier::CommandClassifier;
use crate::services::issue_extractor::IssueExtractor;
use crate::services::metrics_extractor::MetricsExtractor;
use crate::structs::build_analysis::BuildAnalysis;

/// Composes the three extractors over the same raw text into one record.
pub struct AnalysisAssembler;

impl AnalysisAssembler {
    pub fn assemble(output: &str) -> BuildAnalysis {
        let (errors, warnings) = IssueExtractor::extract(output);

        BuildAnalysis {
            command: CommandClassifier::detect_command_type(output),
            target: CommandClassifier::extract_target(output),
            success: CommandClassifier::determine_success(output),
            duration: CommandClassifier::extract_duration(output),
            errors,
            warnings,
            metrics: MetricsExtractor::extract(output),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Returns a derived record whose issues all satisfy `severity >= min`.
    /// The input record is never mutated.
    pub fn apply_severity_filter(record: &BuildAnalysis, min_severity: Severity) -> BuildAnalysis {
        BuildAnalysis {
            errors: record
                .errors
                .iter()
                .filter(|issue| issue.severity() >= min_severity)
                .cloned()
                .collect(),
            warnings: record
                .warnings
                .iter()
                .filter(|issue| issue.severity() >= min_severity)
                .cloned()
                .collect(),
            ..record.clone()
        }
    }
}
