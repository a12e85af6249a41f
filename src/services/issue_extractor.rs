use regex::Captures;
use crate::config::patterns;
use crate::enums::issue_category::IssueCategory;
use crate::structs::issue::Issue;

/// Line-by-line detection and classification of error/warning diagnostics.
///
/// Two line shapes are recognized: a bare "error:"/"warning:" prefix with an
/// optional trailing location, and the standard compiler diagnostic
/// `path:line:column: error|warning: message`. A line that defeats deeper
/// extraction still yields an issue with the catch-all category and no
/// location rather than being dropped.
pub struct IssueExtractor;

impl IssueExtractor {
    pub fn extract(output: &str) -> (Vec<Issue>, Vec<Issue>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for line in output.lines() {
            let trimmed = line.trim();
            let lowered = trimmed.to_lowercase();

            if lowered.starts_with(patterns::ERROR_PREFIX) {
                errors.push(Self::parse_prefixed(trimmed, &lowered, patterns::ERROR_PREFIX.len(), true));
            } else if lowered.starts_with(patterns::WARNING_PREFIX) {
                warnings.push(Self::parse_prefixed(trimmed, &lowered, patterns::WARNING_PREFIX.len(), false));
            } else if let Some(captures) = patterns::DIAGNOSTIC_LINE.captures(trimmed) {
                let is_error = captures[4].eq_ignore_ascii_case("error");
                let issue = Self::parse_diagnostic(&captures, &lowered, is_error);
                if is_error {
                    errors.push(issue);
                } else {
                    warnings.push(issue);
                }
            }
        }

        (errors, warnings)
    }

    fn parse_prefixed(line: &str, lowered: &str, prefix_len: usize, is_error: bool) -> Issue {
        let body = line[prefix_len..].trim();
        let location = Self::split_location(body);

        Issue {
            file: location.file,
            line: location.line,
            column: location.column,
            message: location.message,
            category: Self::classify(lowered, is_error),
        }
    }

    fn parse_diagnostic(captures: &Captures, lowered: &str, is_error: bool) -> Issue {
        Issue {
            file: Some(captures[1].trim().to_string()),
            line: captures[2].parse().ok(),
            column: captures[3].parse().ok(),
            message: captures[5].trim().to_string(),
            category: Self::classify(lowered, is_error),
        }
    }

    fn split_location(body: &str) -> LocatedMessage {
        for extract in LOCATION_EXTRACTORS {
            if let Some(located) = extract(body) {
                return located;
            }
        }

        LocatedMessage {
            file: None,
            line: None,
            column: None,
            message: body.to_string(),
        }
    }

    fn classify(lowered: &str, is_error: bool) -> IssueCategory {
        if is_error {
            for rule in patterns::ERROR_RULES {
                if rule.matches(lowered) {
                    return IssueCategory::Error(rule.category);
                }
            }
            IssueCategory::Error(patterns::ERROR_FALLBACK)
        } else {
            for rule in patterns::WARNING_RULES {
                if rule.matches(lowered) {
                    return IssueCategory::Warning(rule.category);
                }
            }
            IssueCategory::Warning(patterns::WARNING_FALLBACK)
        }
    }
}

struct LocatedMessage {
    file: Option<String>,
    line: Option<usize>,
    column: Option<usize>,
    message: String,
}

// Ordered chain over the message body; each extractor either claims a trailing
// location or passes, and the first success short-circuits.
const LOCATION_EXTRACTORS: &[fn(&str) -> Option<LocatedMessage>] =
    &[trailing_file_line_column, trailing_file_line];

fn trailing_file_line_column(body: &str) -> Option<LocatedMessage> {
    let captures = patterns::TRAILING_LOCATION.captures(body)?;
    let whole = captures.get(0)?;
    let file = captures.get(1)?.as_str().to_string();

    Some(LocatedMessage {
        file: Some(file),
        line: captures.get(2).and_then(|m| m.as_str().parse().ok()),
        column: captures.get(3).and_then(|m| m.as_str().parse().ok()),
        message: body[..whole.start()].trim().to_string(),
    })
}

fn trailing_file_line(body: &str) -> Option<LocatedMessage> {
    let captures = patterns::TRAILING_LINE_LOCATION.captures(body)?;
    let whole = captures.get(0)?;
    let file = captures.get(1)?.as_str().to_string();

    Some(LocatedMessage {
        file: Some(file),
        line: captures.get(2).and_then(|m| m.as_str().parse().ok()),
        column: None,
        message: body[..whole.start()].trim().to_string(),
    })
}
