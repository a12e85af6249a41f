use std::time::Instant;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use crate::config::constants;
use crate::enums::output_format::OutputFormat;
use crate::enums::severity::Severity;
use crate::errors::{BuildsiftError, BuildsiftResult};
use crate::services::analysis_assembler::AnalysisAssembler;
use crate::services::output_formatter::OutputFormatter;
use crate::structs::build_analysis::BuildAnalysis;
use crate::structs::cli::Cli;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run(&mut self, cli: Cli) -> BuildsiftResult<()> {
        self.start_time = Some(Instant::now());

        if atty::is(atty::Stream::Stdin) {
            println!("buildsift: No input detected. Pipe Swift build output to buildsift.");
            println!("Usage: swift build | buildsift");
            return Err(BuildsiftError::input_error("stdin is a terminal"));
        }

        let result = if cli.monitor > 0 {
            self.run_with_monitoring(&cli).await
        } else {
            self.run_once(&cli).await
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Analysis completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn run_once(&self, cli: &Cli) -> BuildsiftResult<()> {
        let mut raw = Vec::new();
        tokio::io::stdin().read_to_end(&mut raw).await?;

        // Invalid UTF-8 degrades to a best-effort string, never a hard failure.
        let output = String::from_utf8_lossy(&raw);

        if output.is_empty() {
            println!("{}", json!({"error": constants::NO_INPUT_MESSAGE}));
            return Err(BuildsiftError::input_error(constants::NO_INPUT_MESSAGE));
        }

        let record = self.analyze(&output, cli);

        if cli.file_timing || cli.bottleneck > 0 {
            Self::print_value(&OutputFormatter::file_timing_report(&record, cli.bottleneck), true)?;
        }

        let (value, pretty) = self.render(&record, cli)?;
        Self::print_value(&value, pretty)
    }

    /// Streaming monitor: buffers stdin line-by-line, emits progress and
    /// error heartbeats as JSON status lines, and fails past the timeout.
    /// The final buffer goes through the same pipeline as the one-shot path.
    async fn run_with_monitoring(&self, cli: &Cli) -> BuildsiftResult<()> {
        println!("{}", json!({"status": "monitoring", "timeout": cli.monitor}));

        let timeout = constants::monitor_timeout(cli.monitor);
        let started = Instant::now();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let mut buffer = String::new();
        let mut line_count = 0usize;
        let mut last_progress = Instant::now();

        loop {
            let Some(remaining) = timeout.checked_sub(started.elapsed()) else {
                return self.report_timeout(cli.monitor, line_count);
            };

            match tokio::time::timeout(remaining, lines.next_line()).await {
                Err(_) => {
                    return self.report_timeout(cli.monitor, line_count);
                }
                Ok(Ok(None)) => break,
                Ok(Ok(Some(line))) => {
                    buffer.push_str(&line);
                    buffer.push('\n');
                    line_count += 1;

                    if line.contains("Compiling")
                        && last_progress.elapsed() > constants::progress_heartbeat()
                    {
                        println!(
                            "{}",
                            json!({"status": "progress", "message": "Compiling...", "lines": line_count})
                        );
                        last_progress = Instant::now();
                    }

                    if line.contains("error:") {
                        println!("{}", json!({"status": "error_detected", "line": line}));
                    }
                }
                Ok(Err(e)) => return Err(e.into()),
            }
        }

        if buffer.is_empty() {
            println!("{}", json!({"error": constants::NO_INPUT_MESSAGE}));
            return Err(BuildsiftError::input_error(constants::NO_INPUT_MESSAGE));
        }

        let record = self.analyze(&buffer, cli);

        if cli.file_timing || cli.bottleneck > 0 {
            Self::print_value(&OutputFormatter::file_timing_report(&record, cli.bottleneck), true)?;
        }

        let (value, _) = self.render(&record, cli)?;
        println!("{}", json!({"status": "completed", "result": value}));
        Ok(())
    }

    fn analyze(&self, output: &str, cli: &Cli) -> BuildAnalysis {
        let record = AnalysisAssembler::assemble(output);
        log::debug!(
            "📊 Parsed {} errors, {} warnings ({} files compiled)",
            record.errors.len(),
            record.warnings.len(),
            record.metrics.files_compiled
        );

        // Filtering at the info floor keeps everything; skip the copy.
        if cli.severity == Severity::Info {
            record
        } else {
            AnalysisAssembler::apply_severity_filter(&record, cli.severity)
        }
    }

    fn render(&self, record: &BuildAnalysis, cli: &Cli) -> BuildsiftResult<(Value, bool)> {
        let rendered = match cli.format {
            OutputFormat::Json => {
                if cli.minimal {
                    (OutputFormatter::minimal(record), false)
                } else if cli.compact {
                    (OutputFormatter::compact(record, cli.bottleneck), false)
                } else {
                    (OutputFormatter::full(record)?, true)
                }
            }
            OutputFormat::Summary => (OutputFormatter::summary(record), true),
            OutputFormat::Detailed => (OutputFormatter::full(record)?, true),
        };

        Ok(rendered)
    }

    fn report_timeout(&self, timeout_secs: u64, line_count: usize) -> BuildsiftResult<()> {
        println!(
            "{}",
            json!({
                "status": "timeout",
                "message": format!("Build timeout after {} seconds", timeout_secs),
                "lines_processed": line_count,
            })
        );
        Err(BuildsiftError::monitor_timeout(timeout_secs, line_count))
    }

    fn print_value(value: &Value, pretty: bool) -> BuildsiftResult<()> {
        let rendered = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            value.to_string()
        };
        println!("{}", rendered);
        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
