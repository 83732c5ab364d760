use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::OutputFormat;

/// Top-level CLI parser for the `sln` binary.
#[derive(Debug, Parser)]
#[command(name = "sln", version, about = "Siteline - staffing-timeline computation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preview the period axis for a date range
    Periods(PeriodsArgs),
    /// Compute the full layout for a staffing-plan document
    Layout(LayoutArgs),
    /// Reconcile the allocation matrix for a staffing-plan document
    Matrix(MatrixArgs),
    /// Export the JSON Schema for a domain type
    Schema(SchemaArgs),
}

#[derive(Debug, Args)]
pub struct PeriodsArgs {
    /// Range start, ISO date (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Range end, ISO date (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,

    /// Bucketing unit: week, month, quarter, year (configured default when omitted)
    #[arg(short, long)]
    pub granularity: Option<String>,
}

#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Path to the staffing-plan JSON document
    #[arg(short, long)]
    pub input: PathBuf,

    /// Anchor date for an empty plan's window (defaults to the local date)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct MatrixArgs {
    /// Path to the staffing-plan JSON document
    #[arg(short, long)]
    pub input: PathBuf,

    /// Anchor date for an empty plan's window (defaults to the local date)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Domain type: plan, layout, item, role, allocation-row, period
    #[arg(short, long)]
    pub entity: String,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sln",
            "periods",
            "--start",
            "2024-01-01",
            "--end",
            "2024-12-31",
            "--format",
            "raw",
            "--quiet",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        let Commands::Periods(args) = cli.command else {
            panic!("expected periods command");
        };
        assert!(args.granularity.is_none());
    }

    #[test]
    fn periods_parses_iso_dates() {
        let cli = Cli::try_parse_from([
            "sln",
            "periods",
            "--start",
            "2024-03-17",
            "--end",
            "2024-05-02",
            "--granularity",
            "month",
        ])
        .expect("cli should parse");

        let Commands::Periods(args) = cli.command else {
            panic!("expected periods command");
        };
        assert_eq!(args.start.to_string(), "2024-03-17");
        assert_eq!(args.granularity.as_deref(), Some("month"));
    }

    #[test]
    fn periods_rejects_malformed_dates() {
        let parsed = Cli::try_parse_from([
            "sln",
            "periods",
            "--start",
            "17/03/2024",
            "--end",
            "2024-05-02",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from([
            "sln",
            "--format",
            "xml",
            "schema",
            "--entity",
            "plan",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn layout_accepts_today_override() {
        let cli = Cli::try_parse_from([
            "sln",
            "layout",
            "--input",
            "plan.json",
            "--today",
            "2024-06-01",
        ])
        .expect("cli should parse");

        let Commands::Layout(args) = cli.command else {
            panic!("expected layout command");
        };
        assert_eq!(args.today.map(|d| d.to_string()).as_deref(), Some("2024-06-01"));
    }
}
