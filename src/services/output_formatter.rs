use std::cmp::Ordering;
use std::path::Path;
use serde_json::{json, Map, Value};
use crate::errors::BuildsiftResult;
use crate::structs::build_analysis::BuildAnalysis;
use crate::structs::file_timing::FileTiming;

/// Pure renderings of one analysis record at the supported fidelity levels.
pub struct OutputFormatter;

impl OutputFormatter {
    pub fn full(record: &BuildAnalysis) -> BuildsiftResult<Value> {
        Ok(serde_json::to_value(record)?)
    }

    pub fn summary(record: &BuildAnalysis) -> Value {
        let mut summary = Map::new();
        summary.insert("command".to_string(), json!(record.command.as_str()));
        summary.insert("success".to_string(), json!(record.success));
        summary.insert("errors".to_string(), json!(record.errors.len()));
        summary.insert("warnings".to_string(), json!(record.warnings.len()));

        if let Some(target) = &record.target {
            summary.insert("target".to_string(), json!(target));
        }
        if let Some(duration) = record.duration {
            summary.insert("duration".to_string(), json!(duration));
        }
        if record.metrics.files_compiled > 0 {
            summary.insert("filesCompiled".to_string(), json!(record.metrics.files_compiled));
        }

        Value::Object(summary)
    }

    /// Short field names; absent duration renders as 0, unlike minimal mode.
    pub fn compact(record: &BuildAnalysis, bottleneck: usize) -> Value {
        let mut compact = Map::new();
        compact.insert("cmd".to_string(), json!(record.command.short()));
        compact.insert("ok".to_string(), json!(record.success));
        compact.insert("time".to_string(), json!(record.duration.unwrap_or(0.0)));
        compact.insert("errs".to_string(), json!(record.errors.len()));
        compact.insert("warns".to_string(), json!(record.warnings.len()));

        if let Some(target) = &record.target {
            compact.insert("tgt".to_string(), json!(target));
        }
        if record.metrics.files_compiled > 0 {
            compact.insert("files".to_string(), json!(record.metrics.files_compiled));
        }
        if record.metrics.compilation_time > 0.0 {
            compact.insert("compile".to_string(), json!(record.metrics.compilation_time));
        }

        if bottleneck > 0 && !record.metrics.file_timings.is_empty() {
            let slowest: Vec<Value> = sorted_by_duration(&record.metrics.file_timings)
                .into_iter()
                .take(bottleneck)
                .map(|timing| json!({"f": basename(&timing.file), "t": timing.duration}))
                .collect();
            compact.insert("slowest".to_string(), Value::Array(slowest));
        }

        Value::Object(compact)
    }

    /// Single-letter keys; zero or absent values are omitted entirely.
    pub fn minimal(record: &BuildAnalysis) -> Value {
        let mut minimal = Map::new();
        minimal.insert("c".to_string(), json!(record.command.short()));
        minimal.insert("s".to_string(), json!(if record.success { 1 } else { 0 }));
        minimal.insert("e".to_string(), json!(record.errors.len()));
        minimal.insert("w".to_string(), json!(record.warnings.len()));

        if let Some(duration) = record.duration {
            if duration > 0.0 {
                minimal.insert("t".to_string(), json!(duration));
            }
        }
        if record.metrics.files_compiled > 0 {
            minimal.insert("f".to_string(), json!(record.metrics.files_compiled));
        }
        if let Some(target) = &record.target {
            if !target.is_empty() {
                minimal.insert("tg".to_string(), json!(target));
            }
        }

        Value::Object(minimal)
    }

    /// All per-file timings by descending duration, or the top-N bottlenecks
    /// with their share of total compilation time.
    pub fn file_timing_report(record: &BuildAnalysis, bottleneck: usize) -> Value {
        let timings = &record.metrics.file_timings;
        if timings.is_empty() {
            return json!({"file_timing": "No file timing data available"});
        }

        let total_time = record.metrics.compilation_time;
        let sorted = sorted_by_duration(timings);

        let mut report = Map::new();
        report.insert("total_files".to_string(), json!(timings.len()));
        report.insert("total_time".to_string(), json!(total_time));
        report.insert("average_time".to_string(), json!(total_time / timings.len() as f64));

        if bottleneck > 0 {
            let bottlenecks: Vec<Value> = sorted
                .into_iter()
                .take(bottleneck)
                .map(|timing| {
                    let percentage = if total_time > 0.0 {
                        timing.duration / total_time * 100.0
                    } else {
                        0.0
                    };
                    json!({
                        "file": basename(&timing.file),
                        "path": timing.file,
                        "duration": timing.duration,
                        "lines": timing.lines_compiled,
                        "percentage": percentage,
                    })
                })
                .collect();
            report.insert("bottlenecks".to_string(), Value::Array(bottlenecks));
        } else {
            let files: Vec<Value> = sorted
                .into_iter()
                .map(|timing| {
                    json!({
                        "file": basename(&timing.file),
                        "path": timing.file,
                        "duration": timing.duration,
                        "lines": timing.lines_compiled,
                    })
                })
                .collect();
            report.insert("files".to_string(), Value::Array(files));
        }

        json!({"file_timing": Value::Object(report)})
    }
}

// Stable sort: insertion order breaks ties between equal durations.
fn sorted_by_duration(timings: &[FileTiming]) -> Vec<&FileTiming> {
    let mut sorted: Vec<&FileTiming> = timings.iter().collect();
    sorted.sort_by(|a, b| b.duration.partial_cmp(&a.duration).unwrap_or(Ordering::Equal));
    sorted
}

fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
