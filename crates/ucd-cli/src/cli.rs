//! CLI argument definitions for the UCD converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ucd",
    version,
    about = "Convert Unicode Character Database text files to JSON",
    long_about = "Convert Unicode Character Database text files to JSON.\n\n\
                  Each configured file is parsed with its field schema, post-processed\n\
                  where its structure needs it, and written as <name>.json."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert every configured file found in a UCD directory.
    Build(BuildArgs),

    /// Convert a single file and print its JSON to stdout.
    Parse(ParseArgs),

    /// List the configured files.
    Files(FieldsArg),
}

/// Location of the field table.
#[derive(Parser)]
pub struct FieldsArg {
    /// Field table to use (default: standards/fields.json).
    #[arg(long = "fields", value_name = "PATH")]
    pub fields: Option<PathBuf>,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Directory containing the UCD text files.
    #[arg(value_name = "UCD_DIR")]
    pub ucd_dir: PathBuf,

    /// Output directory for JSON files (default: <UCD_DIR>/json).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub table: FieldsArg,

    /// Parse and transform without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// UCD text file; its file name selects the schema.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub table: FieldsArg,
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
