//! CLI argument definitions for reclink.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use reclink_model::QueryType;

#[derive(Parser)]
#[command(
    name = "reclink",
    version,
    about = "Cascading record search across tabular sources",
    long_about = "Find every record belonging to one person or vehicle across \
                  independently structured CSV sources.\n\n\
                  Phase 1 matches rows directly against the query; phase 2 pulls \
                  in rows that share an identifier (chassis, engine, plate, phone, \
                  tax/ID number, customer code) with a phase-1 match."
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

    /// Allow queries and row-level identifier values in log output.
    ///
    /// Off by default: source rows hold personal data (names, ID numbers,
    /// phone numbers), and logs travel further than result files.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search all sources for one query and write the result files.
    Search(SearchArgs),

    /// Run a search for every query listed in a file.
    Batch(BatchArgs),

    /// List the logical fields and the column names they are inferred from.
    Fields,
}

#[derive(Args)]
pub struct SearchArgs {
    /// The value to search for (tax/ID/phone/chassis/engine number or name).
    #[arg(long, short = 'q')]
    pub query: String,

    /// What kind of value the query is. `auto` tries every type in
    /// priority order.
    #[arg(long = "type", short = 't', value_enum, default_value = "auto")]
    pub query_type: QueryTypeArg,

    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Args)]
pub struct BatchArgs {
    /// File with one query per line. Blank lines and `#` comments are
    /// skipped.
    #[arg(value_name = "QUERY_FILE")]
    pub query_file: PathBuf,

    /// Query type applied to every query in the file.
    #[arg(long = "type", short = 't', value_enum, default_value = "auto")]
    pub query_type: QueryTypeArg,

    #[command(flatten)]
    pub scan: ScanArgs,
}

/// Options shared by the search and batch commands.
#[derive(Args)]
pub struct ScanArgs {
    /// Folder containing the source CSV files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// JSON mapping profile with explicit column overrides per source.
    #[arg(
        long = "mapping-file",
        value_name = "PATH",
        default_value = "mapping.json"
    )]
    pub mapping_file: PathBuf,

    /// Base folder for result files (one subfolder per query).
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = "./search_results"
    )]
    pub output_dir: PathBuf,

    /// Match and report without writing result files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum QueryTypeArg {
    Tax,
    Id,
    Tel,
    Chassis,
    Engine,
    Name,
    Auto,
}

impl From<QueryTypeArg> for QueryType {
    fn from(arg: QueryTypeArg) -> Self {
        match arg {
            QueryTypeArg::Tax => QueryType::Tax,
            QueryTypeArg::Id => QueryType::Id,
            QueryTypeArg::Tel => QueryType::Tel,
            QueryTypeArg::Chassis => QueryType::Chassis,
            QueryTypeArg::Engine => QueryType::Engine,
            QueryTypeArg::Name => QueryType::Name,
            QueryTypeArg::Auto => QueryType::Auto,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
