use once_cell::sync::Lazy;
use regex::Regex;
use crate::enums::command_kind::CommandKind;
use crate::enums::error_category::ErrorCategory;
use crate::enums::warning_category::WarningCategory;

/// One classification rule: a category guarded by alternative keyword groups.
/// The rule fires when every keyword of any one group is present. Rules live
/// in ordered tables so the priority between them stays visible and testable.
pub struct ClassificationRule<T> {
    pub needles: &'static [&'static [&'static str]],
    pub category: T,
}

impl<T> ClassificationRule<T> {
    pub fn matches(&self, lowercased: &str) -> bool {
        self.needles
            .iter()
            .any(|group| group.iter().all(|needle| lowercased.contains(needle)))
    }
}

// Command detection, most specific phrase set first: test and run output
// also contains the generic compile/link markers of a preceding build.
pub const COMMAND_RULES: &[(&[&str], CommandKind)] = &[
    (&["test suite", "test case", "running tests"], CommandKind::Test),
    (&["running ", "program started", "process finished"], CommandKind::Run),
    (&["package ", "resolve package", "fetch dependencies"], CommandKind::Package),
    (&["compiling", "building for", "linking"], CommandKind::Build),
];

pub const SUCCESS_PHRASES: &[&str] = &[
    "build complete",
    "build succeeded",
    "test suite passed",
    "tests passed",
    "compilation finished",
];

pub const FAILURE_PHRASES: &[&str] = &[
    "build failed",
    "error:",
    "compilation failed",
    "linking failed",
    "test suite failed",
    "tests failed",
    "aborting",
];

pub const ERROR_SIGNALS: &[&str] = &["error:", "cannot ", "failed", "not found"];

pub const ERROR_PREFIX: &str = "error:";
pub const WARNING_PREFIX: &str = "warning:";

pub const TARGET_LINE_MARKERS: &[&str] = &["target ", "module "];

pub const MODULE_COMPILE_MARKERS: &[&str] = &["compile swift module", "compiling swift module"];
pub const LINKING_MARKER: &str = "linking";
pub const BUILD_ARTIFACT_MARKER: &str = ".build";

pub const ERROR_RULES: &[ClassificationRule<ErrorCategory>] = &[
    ClassificationRule { needles: &[&["unresolved identifier"]], category: ErrorCategory::Unresolved },
    ClassificationRule { needles: &[&["cannot convert"]], category: ErrorCategory::Conversion },
    ClassificationRule { needles: &[&["link"], &["symbol"]], category: ErrorCategory::Linking },
    ClassificationRule { needles: &[&["module"], &["import"]], category: ErrorCategory::Module },
    ClassificationRule { needles: &[&["dependency"]], category: ErrorCategory::Dependency },
    ClassificationRule { needles: &[&["unavailable"]], category: ErrorCategory::Unavailable },
    ClassificationRule { needles: &[&["syntax"]], category: ErrorCategory::Syntax },
];

/// Catch-all for error lines no rule matches: the generic type-mismatch bucket.
pub const ERROR_FALLBACK: ErrorCategory = ErrorCategory::Type;

pub const WARNING_RULES: &[ClassificationRule<WarningCategory>] = &[
    ClassificationRule { needles: &[&["unused", "variable"]], category: WarningCategory::UnusedVariable },
    ClassificationRule { needles: &[&["unused", "let"], &["unused", "constant"]], category: WarningCategory::UnusedConstant },
    ClassificationRule { needles: &[&["unused", "import"]], category: WarningCategory::UnusedImport },
    ClassificationRule { needles: &[&["deprecated"]], category: WarningCategory::Deprecated },
    ClassificationRule { needles: &[&["reference to var"]], category: WarningCategory::ClosureReference },
    ClassificationRule { needles: &[&["implicit self"]], category: WarningCategory::ImplicitSelf },
];

pub const WARNING_FALLBACK: WarningCategory = WarningCategory::Unknown;

/// First single-quoted token on a line, e.g. the module name in
/// "Compiling Swift module 'ReadingLibrary' (23 sources)".
pub static QUOTED_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'([^']*)'").expect("valid regex"));

/// Standard compiler diagnostic shape: path:line:column: error|warning: message.
pub static DIAGNOSTIC_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+):(\d+):(\d+):\s*(error|warning):\s*(.*)$").expect("valid regex")
});

/// Trailing path:line:column location. Only purely numeric trailing groups
/// qualify, so messages that merely contain colons are left alone.
pub static TRAILING_LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^:\s]+):(\d+):(\d+)$").expect("valid regex"));

/// Trailing path:line location without a column.
pub static TRAILING_LINE_LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^:\s]+):(\d+)$").expect("valid regex"));

/// Parenthesized duration, e.g. "(0.45s)".
pub static PAREN_SECONDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([0-9]+(?:\.[0-9]+)?)s\)").expect("valid regex"));

/// Worded duration, e.g. "1.23 seconds".
pub static WORDED_SECONDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?) seconds?").expect("valid regex"));

/// Bare trailing duration, e.g. "Total time: 2.1s".
pub static TRAILING_SECONDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)s$").expect("valid regex"));

/// Source count fragment on a module-compile line, e.g. "(23 sources)".
pub static SOURCE_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d+) sources?").expect("valid regex"));

/// Per-file compile timing: an individual .swift path followed by a
/// parenthesized duration.
pub static FILE_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^\s':]+\.swift)\s+\(([0-9]+(?:\.[0-9]+)?)s\)").expect("valid regex")
});
