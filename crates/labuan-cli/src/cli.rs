//! CLI argument definitions for the form transformer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "labuan-form",
    version,
    about = "Fill Labuan tax-return form fields from a spreadsheet",
    long_about = "Convert a Labuan entity tax-return spreadsheet into the fixed-width\n\
                  column layout printed on the return form.\n\n\
                  Reads CSV or Excel/ODS workbooks and writes one CSV row per return."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow names, addresses and tax numbers in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform a return spreadsheet into form columns.
    Transform(TransformArgs),

    /// List the output columns for a layout.
    Columns(LayoutArgs),
}

#[derive(Parser)]
pub struct TransformArgs {
    /// Return spreadsheet (.csv, .xlsx, .xls, .ods).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT stem>_form.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a JSON run report with per-field miss counts.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(Args, Clone)]
pub struct LayoutArgs {
    /// Base column layout.
    #[arg(long = "layout", value_enum, default_value = "full")]
    pub layout: LayoutArg,

    /// Leave out the Part C and Part D boxes.
    #[arg(long = "no-part-c")]
    pub no_part_c: bool,

    /// Leave out the A10/A11 periods and the A12-A20 boxes.
    #[arg(long = "no-periods")]
    pub no_periods: bool,

    /// Print years with two digits instead of four.
    #[arg(long = "two-digit-year")]
    pub two_digit_year: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    /// Year, Part A identity, address and commencement date only.
    Basic,
    /// Every box, including periods and Part C/D.
    Full,
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
