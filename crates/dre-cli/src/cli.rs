//! CLI argument definitions for the category verifier.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dre-verifier",
    version,
    about = "Verificador de Categoria - check dataset categories against the DRE mapping",
    long_about = "Check a dataset's categories against a De/Para mapping table.\n\n\
                  Reads CSV (comma or semicolon) and Excel workbooks, joins each row's\n\
                  category against the mapping, and writes an error report plus a fully\n\
                  annotated workbook."
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
    /// Verify a dataset against the mapping table and write both reports.
    Verify(VerifyArgs),

    /// Show the default mapping tables, or preview a supplied one.
    Mappings(MappingsArgs),
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Dataset to verify (.csv, .xlsx or .xlsm).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Dataset kind; picks the default mapping table and category column.
    #[arg(long = "domain", value_enum, default_value = "despesa")]
    pub domain: DomainArg,

    /// Column holding the categories (default: the domain's column).
    #[arg(long = "category-column", value_name = "NAME")]
    pub category_column: Option<String>,

    /// Mapping table to use when no default table is found.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Use the --mapping file even when a default table exists.
    #[arg(long = "prefer-mapping", requires = "mapping")]
    pub prefer_mapping: bool,

    /// Worksheet to read from a workbook input (default: matched by domain).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Output directory for both reports (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also write a machine-readable JSON summary of the run to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MappingsArgs {
    /// Limit the listing to one domain.
    #[arg(long = "domain", value_enum)]
    pub domain: Option<DomainArg>,

    /// Preview this mapping file instead of the default tables.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,
}

/// CLI domain choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DomainArg {
    /// Expenses: the "Categoria" column against depara_categorias.csv.
    #[value(name = "despesa", alias = "expense")]
    Despesa,
    /// Revenue: the "Produto" column against depara_produtos.csv.
    #[value(name = "receita", alias = "revenue")]
    Receita,
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
