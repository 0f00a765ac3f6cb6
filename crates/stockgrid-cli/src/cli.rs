//! CLI argument definitions for stockgrid.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `stocks` | List instruments with search, sort and paging |
//! | `values` | Show the value series of one instrument |
//! | `export` | Write the value series of one instrument to a JSON file |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `$STOCKGRID_API_URL` | Stock API base URL |
//! | `--timeout-ms` | `3000` | Request timeout in ms |
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! stockgrid stocks --search tech --sort sector --desc
//! stockgrid values 3 --page-size 10 --page 1
//! stockgrid export 3 --output series.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Browse listed instruments and their value series.
#[derive(Debug, Parser)]
#[command(
    name = "stockgrid",
    author,
    version,
    about = "Browse listed instruments and their value series"
)]
pub struct Cli {
    /// Base URL of the stock API. Overrides STOCKGRID_API_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds. Overrides STOCKGRID_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text grid for terminal display.
    Table,
    /// Single JSON envelope.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List instruments.
    ///
    ///   stockgrid stocks --search fin --sort currencyCode
    Stocks(StocksArgs),

    /// Show the value series of an instrument.
    ///
    ///   stockgrid values 3 --sort value --desc
    Values(ValuesArgs),

    /// Export the value series of an instrument to JSON.
    ///
    ///   stockgrid export 3 --output series.json
    Export(ExportArgs),
}

/// Sort and paging options shared by table commands.
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Column to sort by (wire name, e.g. stock, currencyCode, date, value).
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long, default_value_t = false)]
    pub desc: bool,

    /// Zero-based page index.
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Rows per page: 5, 10 or 25. Overrides STOCKGRID_PAGE_SIZE.
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct StocksArgs {
    /// Case-insensitive text matched against stock, industry, sector and currency.
    #[arg(long, default_value = "")]
    pub search: String,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ValuesArgs {
    /// Instrument id.
    pub id: String,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Instrument id.
    pub id: String,

    /// Destination JSON file.
    #[arg(long)]
    pub output: PathBuf,
}

impl Command {
    pub fn page_size(&self) -> Option<usize> {
        match self {
            Self::Stocks(args) => args.table.page_size,
            Self::Values(args) => args.table.page_size,
            Self::Export(_) => None,
        }
    }
}
