use clap::Parser;
use crate::enums::output_format::OutputFormat;
use crate::enums::severity::Severity;

#[derive(Parser, Debug)]
#[clap(name = "buildsift")]
#[clap(about = "Context-efficient Swift build analysis tool", long_about = None)]
#[clap(version)]
pub struct Cli {
    /// Output format (json, summary, detailed)
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Minimum issue severity to include (info, warning, error, critical)
    #[clap(long, value_enum, default_value_t = Severity::Info)]
    pub severity: Severity,

    /// Include debug logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Compact output mode (short field names, single line)
    #[clap(long)]
    pub compact: bool,

    /// Minimal output mode (single-letter keys, zero values omitted)
    #[clap(long)]
    pub minimal: bool,

    /// Monitor build progress with timeout in seconds (0 for no monitoring)
    #[clap(long, default_value_t = 0)]
    pub monitor: u64,

    /// Show file-level compilation timing
    #[clap(long)]
    pub file_timing: bool,

    /// Show top N slowest files (0 disables bottleneck mode)
    #[clap(long, default_value_t = 0)]
    pub bottleneck: usize,
}
