use crate::config::patterns;
use crate::enums::command_kind::CommandKind;

/// Whole-blob heuristics: command kind, target, success, elapsed duration.
pub struct CommandClassifier;

impl CommandClassifier {
    pub fn detect_command_type(output: &str) -> CommandKind {
        let lowered = output.to_lowercase();

        for (phrases, kind) in patterns::COMMAND_RULES {
            if phrases.iter().any(|phrase| lowered.contains(phrase)) {
                return *kind;
            }
        }

        CommandKind::Unknown
    }

    pub fn extract_target(output: &str) -> Option<String> {
        for line in output.lines() {
            let trimmed = line.trim();

            // Lines like "Compiling Swift module 'MyTarget'" or
            // "Building target 'MyTarget'"
            if patterns::TARGET_LINE_MARKERS.iter().any(|marker| trimmed.contains(marker)) {
                if let Some(captures) = patterns::QUOTED_TOKEN.captures(trimmed) {
                    return Some(captures[1].to_string());
                }
            }
        }

        None
    }

    /// Explicit success phrases win, then explicit failure phrases; only when
    /// neither is present does the bare "error:" substring decide.
    pub fn determine_success(output: &str) -> bool {
        let lowered = output.to_lowercase();

        if patterns::SUCCESS_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
            return true;
        }

        if patterns::FAILURE_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
            return false;
        }

        !lowered.contains(patterns::ERROR_PREFIX)
    }

    pub fn extract_duration(output: &str) -> Option<f64> {
        for line in output.lines() {
            let trimmed = line.trim();

            for extract in DURATION_EXTRACTORS {
                if let Some(seconds) = extract(trimmed) {
                    return Some(seconds);
                }
            }
        }

        None
    }

    /// Cheap upstream signal, independent of `determine_success`; the two may
    /// disagree and `determine_success` is authoritative for the record.
    pub fn has_error_output(output: &str) -> bool {
        let lowered = output.to_lowercase();
        patterns::ERROR_SIGNALS.iter().any(|signal| lowered.contains(signal))
    }
}

// Ordered per-line chain; the first extractor to produce a value wins.
const DURATION_EXTRACTORS: &[fn(&str) -> Option<f64>] =
    &[paren_seconds, worded_seconds, trailing_seconds];

fn paren_seconds(line: &str) -> Option<f64> {
    patterns::PAREN_SECONDS
        .captures(line)
        .and_then(|captures| captures[1].parse().ok())
}

fn worded_seconds(line: &str) -> Option<f64> {
    patterns::WORDED_SECONDS
        .captures(line)
        .and_then(|captures| captures[1].parse().ok())
}

fn trailing_seconds(line: &str) -> Option<f64> {
    patterns::TRAILING_SECONDS
        .captures(line)
        .and_then(|captures| captures[1].parse().ok())
}
