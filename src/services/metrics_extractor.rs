use crate::config::patterns;
use crate::structs::build_metrics::BuildMetrics;
use crate::structs::file_timing::FileTiming;

/// Single-pass accumulation of compile/link telemetry.
///
/// The scalar counters follow the toolchain's own summary lines and take the
/// last value seen; `modules_linked` and `file_timings` are additive.
pub struct MetricsExtractor;

impl MetricsExtractor {
    pub fn extract(output: &str) -> BuildMetrics {
        let mut metrics = BuildMetrics::default();

        for line in output.lines() {
            let trimmed = line.trim();
            let lowered = trimmed.to_lowercase();

            let module_compile = patterns::MODULE_COMPILE_MARKERS
                .iter()
                .any(|marker| lowered.contains(marker));

            if module_compile {
                if let Some(captures) = patterns::SOURCE_COUNT.captures(trimmed) {
                    if let Ok(count) = captures[1].parse() {
                        metrics.files_compiled = count;
                    }
                }
                if let Some(seconds) = paren_seconds(trimmed) {
                    metrics.compilation_time = seconds;
                }
            }

            if lowered.contains(patterns::LINKING_MARKER) {
                if let Some(seconds) = paren_seconds(trimmed) {
                    metrics.linking_time = seconds;
                }
                if trimmed.contains(patterns::BUILD_ARTIFACT_MARKER) {
                    metrics.modules_linked += 1;
                }
            }

            // Per-file timing lines name an individual source file; the
            // module summary lines above never do.
            if !module_compile {
                if let Some(captures) = patterns::FILE_TIMING.captures(trimmed) {
                    if let Ok(duration) = captures[2].parse() {
                        metrics.file_timings.push(FileTiming {
                            file: captures[1].to_string(),
                            duration,
                            lines_compiled: 0,
                        });
                    }
                }
            }
        }

        metrics
    }
}

fn paren_seconds(line: &str) -> Option<f64> {
    patterns::PAREN_SECONDS
        .captures(line)
        .and_then(|captures| captures[1].parse().ok())
}
