//! CLI argument definitions for the QLC wordlist toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qlc",
    version,
    about = "QLC wordlist toolkit - reshape concept spreadsheets into wordlists",
    long_about = "Reshape a delimited concept/counterpart spreadsheet into a flat\n\
                  relational wordlist for lexical-statistics analysis.\n\n\
                  Language columns are identified by a header substring, multi-value\n\
                  cells are exploded, and cells are Unicode-normalized and cleaned\n\
                  through an optional blacklist of regex substitutions."
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
    /// Run the pipeline and write the wordlist file.
    Convert(ConvertArgs),

    /// Print fill statistics for the matrix.
    Stats(StatsArgs),

    /// Pretty-print the matrix.
    Show(ShowArgs),

    /// Print the legacy flat format.
    Dump(DumpArgs),
}

/// Spreadsheet flags shared by every subcommand.
#[derive(Parser)]
pub struct SpreadsheetArgs {
    /// Path to the spreadsheet file.
    #[arg(value_name = "SPREADSHEET")]
    pub path: PathBuf,

    /// Column separator in the input file.
    #[arg(long, value_name = "CHAR", default_value = "\t")]
    pub separator: char,

    /// Comment-line marker in the input file.
    #[arg(long, value_name = "CHAR", default_value = "#")]
    pub comment: char,

    /// Substring identifying language columns in the header.
    #[arg(long = "language-marker", value_name = "TEXT", default_value = "NAME")]
    pub language_marker: String,

    /// Header text identifying the concept column.
    #[arg(long = "concept-marker", value_name = "TEXT", default_value = "CONCEPT")]
    pub concept_marker: String,

    /// Path to a blacklist rule file (pattern,replacement per line).
    #[arg(long, value_name = "PATH")]
    pub blacklist: Option<PathBuf>,

    /// Path to a rule configuration file (reserved).
    #[arg(long = "rule-config", value_name = "PATH")]
    pub rule_config: Option<PathBuf>,

    /// Separator packing multiple counterparts into one cell.
    #[arg(long = "cell-separator", value_name = "TEXT", default_value = ";")]
    pub cell_separator: String,

    /// File extension hint appended to the input path before opening.
    #[arg(long = "file-format", value_name = "EXT")]
    pub file_format: Option<String>,

    /// Loader datatype hint (recorded, not applied).
    #[arg(long, value_name = "TYPE")]
    pub dtype: Option<String>,

    /// Expand only rows where every cell is non-empty.
    #[arg(long = "full-rows")]
    pub full_rows: bool,
}

#[derive(Parser)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub spreadsheet: SpreadsheetArgs,

    /// Output path (default: wordlist-<timestamp>.qlc).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "qlc")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub spreadsheet: SpreadsheetArgs,

    /// Emit the stats as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub spreadsheet: SpreadsheetArgs,

    /// Delimiter between printed columns.
    #[arg(long, value_name = "TEXT", default_value = "\t")]
    pub delimiter: String,
}

#[derive(Parser)]
pub struct DumpArgs {
    #[command(flatten)]
    pub spreadsheet: SpreadsheetArgs,
}

/// Output format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Qlc,
    /// Deprecated alias for qlc.
    Csv,
}

impl OutputFormatArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Qlc => "qlc",
            Self::Csv => "csv",
        }
    }
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
