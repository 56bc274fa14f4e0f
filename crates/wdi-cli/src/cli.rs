//! CLI argument definitions for the indicator exporter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "wdi-exporter",
    version,
    about = "Reshape wide-format indicator data and export it to Excel",
    long_about = "Reshape a WDI-style wide dataset (one column per year) into long\n\
                  format (one row per entity-indicator-year-value), optionally merge\n\
                  entity metadata, and export the result to a multi-sheet workbook."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reshape a wide dataset and export it to a workbook.
    Export(ExportArgs),

    /// Show the detected schema of a wide dataset without writing output.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the wide-format main dataset CSV.
    #[arg(value_name = "MAIN_CSV")]
    pub main_csv: PathBuf,

    /// Optional entity metadata CSV (e.g. the WDI country file).
    #[arg(long = "metadata", value_name = "PATH")]
    pub metadata: Option<PathBuf>,

    /// Output workbook path.
    #[arg(long = "output", value_name = "PATH", default_value = "indicator_output.xlsx")]
    pub output: PathBuf,

    /// Maximum data rows per sheet (header row not counted).
    #[arg(long = "rows-per-sheet", value_name = "N", default_value_t = 1_048_575)]
    pub rows_per_sheet: usize,

    /// Paginate each indicator's rows into its own sheet(s).
    #[arg(long = "split-by-indicator")]
    pub split_by_indicator: bool,

    /// Drop records whose value is missing instead of keeping them.
    #[arg(long = "drop-missing")]
    pub drop_missing: bool,

    /// Skip the trailing Indicator_Info catalog sheet.
    #[arg(long = "no-indicator-info")]
    pub no_indicator_info: bool,

    /// Metadata attribute column to merge (repeatable; default: all).
    #[arg(long = "metadata-column", value_name = "NAME")]
    pub metadata_columns: Vec<String>,

    /// Header fragment of the metadata key column.
    #[arg(long = "metadata-key", value_name = "NAME", default_value = "Country Code")]
    pub metadata_key: String,

    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Write a JSON run report to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the wide-format main dataset CSV.
    #[arg(value_name = "MAIN_CSV")]
    pub main_csv: PathBuf,

    #[command(flatten)]
    pub schema: SchemaArgs,
}

/// Header fragments used to locate the key columns.
#[derive(Parser)]
pub struct SchemaArgs {
    /// Header fragment of the entity identifier column.
    #[arg(long = "entity-column", value_name = "NAME", default_value = "Country Code")]
    pub entity_column: String,

    /// Header fragment of the indicator code column.
    #[arg(long = "indicator-column", value_name = "NAME", default_value = "Indicator Code")]
    pub indicator_column: String,

    /// Header fragment of the indicator name column.
    #[arg(
        long = "indicator-name-column",
        value_name = "NAME",
        default_value = "Indicator Name"
    )]
    pub indicator_name_column: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
