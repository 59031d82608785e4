use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "a11ylens")]
#[command(
    version,
    about = "Accessibility audit analytics - aggregate, compare, and trend audit results",
    long_about = "a11ylens\n\nModes:\n- summary: aggregate one audit's violations into severity counts, dominant element patterns, and a health score.\n- compare: diff two audits by rule, bucketing violations as new/fixed/persistent/worsened/improved.\n- evolution: analyze a chronological series of audits for per-tier trends.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set penalty weights and noise threshold; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a single audit: severity counts, patterns, health score
    Summary {
        #[arg(long, help = "Path to the violations JSON array")]
        violations: PathBuf,

        #[arg(
            long,
            help = "Optional audit snapshot JSON (enables page counts and stored score reuse)"
        )]
        audit: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Compare the current audit against a previous one
    Compare {
        #[arg(long, help = "Current audit snapshot JSON")]
        current_audit: PathBuf,

        #[arg(long, help = "Current violations JSON array")]
        current_violations: PathBuf,

        #[arg(long, help = "Previous audit snapshot JSON (omit for a first audit)")]
        previous_audit: Option<PathBuf>,

        #[arg(long, help = "Previous violations JSON array")]
        previous_violations: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Analyze trends across a chronological series of audits
    Evolution {
        #[arg(
            long,
            help = "Series JSON: array of audit records (with violations), oldest first"
        )]
        audits: PathBuf,

        #[arg(
            long,
            help = "Relative change below which a trend reads as stable (0-1)"
        )]
        noise_threshold: Option<f64>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable JSON (single line)
    Json,
    /// Human-readable text with colors when stdout is a terminal
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
